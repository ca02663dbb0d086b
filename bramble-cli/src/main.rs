//! Bramble CLI
//!
//! Parses an HTML document and prints what the engine made of it: the DOM
//! tree, the raw token stream, a JSON dump, the parse issues, or the CSS found
//! in the document.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bramble_css::{AtRuleBlock, InlineStyle, Rule, inline_styles, style_sheets};
use bramble_dom::{DomTree, Namespace, NodeId, NodeType};
use bramble_html::{
    InputEncoding, IssueKind, ParseIssue, ParseOutput, ParserOptions, format_tree,
    input::decode, parse_with_options, tokenize,
};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use serde_json::{Value, json};

/// Bramble: inspect how the HTML and CSS parsers see a document
#[derive(Parser, Debug)]
#[command(name = "bramble")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the DOM tree of a file
    bramble page.html

    # Read from stdin and list parse issues
    cat page.html | bramble --issues

    # Parse inline HTML and dump it as JSON
    bramble --html '<p>Hello<b>world' --json

    # Show the stylesheets and inline styles
    bramble --css page.html
"#)]
struct Cli {
    /// HTML file to parse; stdin when omitted or `-`
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Parse this HTML string instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Print the token stream instead of the tree
    #[arg(long, conflicts_with_all = ["json", "css"])]
    tokens: bool,

    /// Print the tree as JSON
    #[arg(long, conflicts_with = "css")]
    json: bool,

    /// Print the document's stylesheets and inline styles
    #[arg(long)]
    css: bool,

    /// Also print parse issues
    #[arg(short, long)]
    issues: bool,

    /// Parse with the scripting flag enabled (affects `noscript`)
    #[arg(long)]
    scripting: bool,

    /// Parse as an iframe srcdoc document (never quirks)
    #[arg(long)]
    srcdoc: bool,

    /// How to decode the input bytes
    #[arg(long, value_enum, default_value_t = EncodingArg::Auto)]
    encoding: EncodingArg,

    /// Do not keep parse issues
    #[arg(long, conflicts_with = "issues")]
    no_issues: bool,

    /// Keep at most this many parse issues
    #[arg(long, value_name = "N")]
    max_issues: Option<usize>,

    /// Print the effective parser options as JSON and exit
    #[arg(long)]
    print_options: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log parse errors and engine warnings (debug level)
    #[arg(short, long)]
    verbose: bool,
}

/// `--encoding` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EncodingArg {
    Auto,
    Utf8,
    Latin1,
    Windows1252,
}

impl From<EncodingArg> for InputEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Auto => Self::Auto,
            EncodingArg::Utf8 => Self::Utf8,
            EncodingArg::Latin1 => Self::Latin1,
            EncodingArg::Windows1252 => Self::Windows1252,
        }
    }
}

impl Cli {
    fn parser_options(&self) -> ParserOptions {
        ParserOptions::default()
            .with_scripting(self.scripting)
            .with_iframe_srcdoc(self.srcdoc)
            .with_encoding(self.encoding.into())
            .with_collect_issues(!self.no_issues)
            .with_max_issues(self.max_issues)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let options = cli.parser_options();
    if cli.print_options {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    let bytes = read_input(&cli)?;
    log::info!("read {} bytes", bytes.len());

    if cli.tokens {
        let text = decode(&bytes, options.encoding);
        for token in tokenize(&text) {
            println!("{token}");
        }
        return Ok(());
    }

    let ParseOutput { tree, issues } = parse_with_options(&bytes, options);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&node_to_json(&tree, NodeId::ROOT))?);
    } else if cli.css {
        print_css(&tree, cli.no_color);
    } else {
        print!("{}", format_tree(&tree, NodeId::ROOT));
    }

    if cli.issues {
        print_issues(&issues, cli.no_color);
    }

    Ok(())
}

/// Read the document from `--html`, a file, or stdin.
fn read_input(cli: &Cli) -> Result<Vec<u8>> {
    if let Some(html) = &cli.html {
        return Ok(html.clone().into_bytes());
    }
    match &cli.path {
        Some(path) if path.as_os_str() != "-" => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut bytes = Vec::new();
            let _ = io::stdin()
                .read_to_end(&mut bytes)
                .context("failed to read stdin")?;
            Ok(bytes)
        }
    }
}

// ========================================================================
// JSON dump
// ========================================================================

/// Convert a node and its subtree to JSON. Template contents are emitted
/// under a `content` key.
fn node_to_json(tree: &DomTree, id: NodeId) -> Value {
    let children: Vec<Value> = tree
        .children(id)
        .iter()
        .map(|&child| node_to_json(tree, child))
        .collect();

    let Some(node) = tree.get(id) else {
        return Value::Null;
    };

    match &node.node_type {
        NodeType::Document(data) => json!({
            "type": "document",
            "mode": data.mode.as_str(),
            "children": children,
        }),
        NodeType::DocumentType(doctype) => json!({
            "type": "doctype",
            "name": doctype.name,
            "publicId": doctype.public_id,
            "systemId": doctype.system_id,
        }),
        NodeType::DocumentFragment => json!({
            "type": "fragment",
            "children": children,
        }),
        NodeType::Element(element) => {
            let attributes: Vec<Value> = element
                .attributes
                .iter()
                .map(|attr| {
                    json!({
                        "name": attr.qualified_name(),
                        "namespace": attr.namespace().map(Namespace::url),
                        "value": attr.value(),
                    })
                })
                .collect();
            let mut value = json!({
                "type": "element",
                "namespace": element.namespace.url(),
                "localName": element.local_name,
                "attributes": attributes,
                "children": children,
            });
            if let Some(contents) = element.template_contents {
                value["content"] = node_to_json(tree, contents);
            }
            value
        }
        NodeType::Text(data) => json!({ "type": "text", "data": data }),
        NodeType::Comment(data) => json!({ "type": "comment", "data": data }),
        NodeType::ProcessingInstruction(pi) => json!({
            "type": "processing-instruction",
            "target": pi.target,
            "data": pi.data,
        }),
    }
}

// ========================================================================
// Issues
// ========================================================================

fn print_issues(issues: &[ParseIssue], no_color: bool) {
    println!("\n=== Parse Issues ({}) ===", issues.len());
    for issue in issues {
        let kind = issue.kind.to_string();
        let label = issue
            .code
            .map_or_else(|| issue.message.clone(), |code| code.to_string());
        if no_color {
            println!("  {:>6}  {kind}  {label}", issue.position);
        } else {
            let kind = match issue.kind {
                IssueKind::Tokenizer => kind.yellow().to_string(),
                IssueKind::TreeConstruction => kind.cyan().to_string(),
                IssueKind::Unsupported => kind.magenta().to_string(),
            };
            println!("  {:>6}  {kind}  {label}", issue.position.dimmed());
        }
    }
}

// ========================================================================
// CSS
// ========================================================================

fn print_css(tree: &DomTree, no_color: bool) {
    let sheets = style_sheets(tree);
    println!("=== Stylesheets ({}) ===", sheets.len());
    for (index, sheet) in sheets.iter().enumerate() {
        println!("\n/* <style> #{} */", index + 1);
        print_rules(&sheet.rules, 0, no_color);
    }

    let inline = inline_styles(tree);
    println!("\n=== Inline Styles ({}) ===", inline.len());
    for style in &inline {
        print_inline_style(tree, style);
    }

    let rule_count: usize = sheets.iter().map(|sheet| sheet.style_rules().len()).sum();
    log::info!("{rule_count} style rules in {} sheets", sheets.len());
}

fn print_rules(rules: &[Rule], depth: usize, no_color: bool) {
    let indent = "  ".repeat(depth);
    for rule in rules {
        match rule {
            Rule::Style(style) => {
                let selectors: Vec<String> = style
                    .selectors
                    .iter()
                    .map(|selector| match selector.parse() {
                        Some(parsed) => {
                            let spec = parsed.specificity;
                            let note = format!("/* ({},{},{}) */", spec.0, spec.1, spec.2);
                            let note = if no_color { note } else { note.dimmed().to_string() };
                            format!("{} {note}", selector.text)
                        }
                        None => format!("{} /* unsupported */", selector.text),
                    })
                    .collect();
                println!("{indent}{} {{", selectors.join(", "));
                for declaration in &style.declarations {
                    println!("{indent}  {declaration};");
                }
                println!("{indent}}}");
            }
            Rule::At(at_rule) => {
                let prelude = at_rule.prelude_text();
                let head = if prelude.is_empty() {
                    format!("@{}", at_rule.name)
                } else {
                    format!("@{} {prelude}", at_rule.name)
                };
                match &at_rule.block {
                    None => println!("{indent}{head};"),
                    Some(AtRuleBlock::Rules(nested)) => {
                        println!("{indent}{head} {{");
                        print_rules(nested, depth + 1, no_color);
                        println!("{indent}}}");
                    }
                    Some(AtRuleBlock::Declarations(declarations)) => {
                        println!("{indent}{head} {{");
                        for declaration in declarations {
                            println!("{indent}  {declaration};");
                        }
                        println!("{indent}}}");
                    }
                    Some(AtRuleBlock::Raw(values)) => {
                        println!("{indent}{head} {{{}}}", bramble_css::parser::serialize(values));
                    }
                }
            }
        }
    }
}

fn print_inline_style(tree: &DomTree, style: &InlineStyle) {
    let name = tree
        .as_element(style.element)
        .map_or("?", |element| element.local_name.as_str());
    let declarations: Vec<String> = style
        .declarations
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("<{name}> ({:?}): {}", style.element, declarations.join("; "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parser_options_from_flags() {
        let cli = Cli::parse_from([
            "bramble",
            "--scripting",
            "--srcdoc",
            "--encoding",
            "windows1252",
            "--max-issues",
            "3",
        ]);
        let options = cli.parser_options();
        assert!(options.scripting);
        assert!(options.iframe_srcdoc);
        assert_eq!(options.encoding, InputEncoding::Windows1252);
        assert_eq!(options.max_issues, Some(3));
        assert!(options.collect_issues);
    }

    #[test]
    fn test_json_dump() {
        let tree = bramble_html::parse_str("<!DOCTYPE html><p class=x>hi</p><template>t</template>");
        let value = node_to_json(&tree, NodeId::ROOT);
        assert_eq!(value["type"], "document");
        assert_eq!(value["mode"], "no-quirks");
        assert_eq!(value["children"][0]["type"], "doctype");

        let html = &value["children"][1];
        assert_eq!(html["localName"], "html");
        let body = &html["children"][1];
        let paragraph = &body["children"][0];
        assert_eq!(paragraph["attributes"][0]["name"], "class");
        assert_eq!(paragraph["children"][0]["data"], "hi");

        let head = &html["children"][0];
        assert_eq!(head["localName"], "head");
        let template = &body["children"][1];
        assert_eq!(template["localName"], "template");
        assert_eq!(template["content"]["children"][0]["data"], "t");
    }

    #[test]
    fn test_stylesheet_type_is_reexported() {
        let sheet: bramble_css::Stylesheet = bramble_css::parse("a { b: c }").unwrap_or_default();
        assert_eq!(sheet.rules.len(), 1);
    }
}
