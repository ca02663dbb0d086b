//! Document mode selection from the DOCTYPE token.
//!
//! [§ 13.2.6.4.1 The "initial" insertion mode](https://html.spec.whatwg.org/multipage/parsing.html#the-initial-insertion-mode)
//!
//! The identifier lists are the standard's verbatim, lowercased so they can
//! be compared against a lowercased identifier.

use bramble_dom::DocumentMode;

/// "The public identifier is set to" one of these (compared case-insensitively).
static QUIRKS_PUBLIC_ID_EXACT: &[&str] = &[
    "-//w3o//dtd w3 html strict 3.0//en//",
    "-/w3c/dtd html 4.0 transitional/en",
    "html",
];

/// "The system identifier is set to" this value.
static QUIRKS_SYSTEM_ID_EXACT: &[&str] =
    &["http://www.ibm.com/data/dtd/v11/ibmxhtml1-transitional.dtd"];

/// "The public identifier starts with" one of these.
static QUIRKS_PUBLIC_ID_PREFIXES: &[&str] = &[
    "+//silmaril//dtd html pro v0r11 19970101//",
    "-//as//dtd html 3.0 aswedit + extensions//",
    "-//advasoft ltd//dtd html 3.0 aswedit + extensions//",
    "-//ietf//dtd html 2.0 level 1//",
    "-//ietf//dtd html 2.0 level 2//",
    "-//ietf//dtd html 2.0 strict level 1//",
    "-//ietf//dtd html 2.0 strict level 2//",
    "-//ietf//dtd html 2.0 strict//",
    "-//ietf//dtd html 2.0//",
    "-//ietf//dtd html 2.1e//",
    "-//ietf//dtd html 3.0//",
    "-//ietf//dtd html 3.2 final//",
    "-//ietf//dtd html 3.2//",
    "-//ietf//dtd html 3//",
    "-//ietf//dtd html level 0//",
    "-//ietf//dtd html level 1//",
    "-//ietf//dtd html level 2//",
    "-//ietf//dtd html level 3//",
    "-//ietf//dtd html strict level 0//",
    "-//ietf//dtd html strict level 1//",
    "-//ietf//dtd html strict level 2//",
    "-//ietf//dtd html strict level 3//",
    "-//ietf//dtd html strict//",
    "-//ietf//dtd html//",
    "-//metrius//dtd metrius presentational//",
    "-//microsoft//dtd internet explorer 2.0 html strict//",
    "-//microsoft//dtd internet explorer 2.0 html//",
    "-//microsoft//dtd internet explorer 2.0 tables//",
    "-//microsoft//dtd internet explorer 3.0 html strict//",
    "-//microsoft//dtd internet explorer 3.0 html//",
    "-//microsoft//dtd internet explorer 3.0 tables//",
    "-//netscape comm. corp.//dtd html//",
    "-//netscape comm. corp.//dtd strict html//",
    "-//o'reilly and associates//dtd html 2.0//",
    "-//o'reilly and associates//dtd html extended 1.0//",
    "-//o'reilly and associates//dtd html extended relaxed 1.0//",
    "-//sq//dtd html 2.0 hotmetal + extensions//",
    "-//softquad software//dtd hotmetal pro 6.0::19990601::extensions to html 4.0//",
    "-//softquad//dtd hotmetal pro 4.0::19971010::extensions to html 4.0//",
    "-//spyglass//dtd html 2.0 extended//",
    "-//sun microsystems corp.//dtd hotjava html//",
    "-//sun microsystems corp.//dtd hotjava strict html//",
    "-//w3c//dtd html 3 1995-03-24//",
    "-//w3c//dtd html 3.2 draft//",
    "-//w3c//dtd html 3.2 final//",
    "-//w3c//dtd html 3.2//",
    "-//w3c//dtd html 3.2s draft//",
    "-//w3c//dtd html 4.0 frameset//",
    "-//w3c//dtd html 4.0 transitional//",
    "-//w3c//dtd html experimental 19960712//",
    "-//w3c//dtd html experimental 970421//",
    "-//w3c//dtd w3 html//",
    "-//w3o//dtd w3 html 3.0//",
    "-//webtechs//dtd mozilla html 2.0//",
    "-//webtechs//dtd mozilla html//",
];

/// HTML 4.01 Frameset and Transitional: quirks without a system identifier,
/// limited-quirks with one.
static HTML401_PUBLIC_ID_PREFIXES: &[&str] = &[
    "-//w3c//dtd html 4.01 frameset//",
    "-//w3c//dtd html 4.01 transitional//",
];

/// "The public identifier starts with" one of these: limited-quirks.
static LIMITED_QUIRKS_PUBLIC_ID_PREFIXES: &[&str] = &[
    "-//w3c//dtd xhtml 1.0 frameset//",
    "-//w3c//dtd xhtml 1.0 transitional//",
];

fn starts_with_any(id: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| id.starts_with(prefix))
}

/// Pick the document mode for a DOCTYPE token.
///
/// "If the document is not an iframe srcdoc document, and the parser cannot
/// change the mode flag is false, and the DOCTYPE token matches one of the
/// conditions in the following list, then set the Document to quirks mode"
/// ... "Otherwise, if ... then set the Document to limited-quirks mode"
///
/// The srcdoc check is the caller's.
pub(crate) fn document_mode_for_doctype(
    name: Option<&str>,
    public_identifier: Option<&str>,
    system_identifier: Option<&str>,
    force_quirks: bool,
) -> DocumentMode {
    // "The force-quirks flag is set to on."
    // "The name is not "html"."
    if force_quirks || name != Some("html") {
        return DocumentMode::Quirks;
    }

    let public_id = public_identifier.map(str::to_ascii_lowercase);
    let system_id = system_identifier.map(str::to_ascii_lowercase);
    let public_id = public_id.as_deref();

    if let Some(public_id) = public_id {
        if QUIRKS_PUBLIC_ID_EXACT.contains(&public_id)
            || starts_with_any(public_id, QUIRKS_PUBLIC_ID_PREFIXES)
        {
            return DocumentMode::Quirks;
        }
        // "The system identifier is missing and the public identifier starts
        // with: "-//W3C//DTD HTML 4.01 Frameset//" ..."
        if system_id.is_none() && starts_with_any(public_id, HTML401_PUBLIC_ID_PREFIXES) {
            return DocumentMode::Quirks;
        }
    }
    if system_id
        .as_deref()
        .is_some_and(|system_id| QUIRKS_SYSTEM_ID_EXACT.contains(&system_id))
    {
        return DocumentMode::Quirks;
    }

    if let Some(public_id) = public_id {
        if starts_with_any(public_id, LIMITED_QUIRKS_PUBLIC_ID_PREFIXES) {
            return DocumentMode::LimitedQuirks;
        }
        // "The system identifier is not missing and the public identifier
        // starts with: "-//W3C//DTD HTML 4.01 Frameset//" ..."
        if system_id.is_some() && starts_with_any(public_id, HTML401_PUBLIC_ID_PREFIXES) {
            return DocumentMode::LimitedQuirks;
        }
    }

    DocumentMode::NoQuirks
}

/// [§ 13.2.6.4.1](https://html.spec.whatwg.org/multipage/parsing.html#the-initial-insertion-mode)
///
/// "If the DOCTYPE token's name is not "html", or the token's public
/// identifier is not missing, or the token's system identifier is neither
/// missing nor "about:legacy-compat", then there is a parse error."
pub(crate) fn is_conforming_doctype(
    name: Option<&str>,
    public_identifier: Option<&str>,
    system_identifier: Option<&str>,
) -> bool {
    name == Some("html")
        && public_identifier.is_none()
        && system_identifier.is_none_or(|id| id == "about:legacy-compat")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html5_doctype_is_no_quirks() {
        assert_eq!(
            document_mode_for_doctype(Some("html"), None, None, false),
            DocumentMode::NoQuirks
        );
    }

    #[test]
    fn test_missing_or_other_name_is_quirks() {
        assert_eq!(
            document_mode_for_doctype(None, None, None, false),
            DocumentMode::Quirks
        );
        assert_eq!(
            document_mode_for_doctype(Some("svg"), None, None, false),
            DocumentMode::Quirks
        );
    }

    #[test]
    fn test_force_quirks_wins() {
        assert_eq!(
            document_mode_for_doctype(Some("html"), None, None, true),
            DocumentMode::Quirks
        );
    }

    #[test]
    fn test_public_id_matching_is_case_insensitive() {
        assert_eq!(
            document_mode_for_doctype(
                Some("html"),
                Some("-//W3O//DTD W3 HTML Strict 3.0//EN//"),
                None,
                false
            ),
            DocumentMode::Quirks
        );
        assert_eq!(
            document_mode_for_doctype(
                Some("html"),
                Some("-//IETF//DTD HTML 2.0//EN"),
                None,
                false
            ),
            DocumentMode::Quirks
        );
    }

    #[test]
    fn test_html401_frameset_depends_on_system_id() {
        let public = Some("-//W3C//DTD HTML 4.01 Frameset//EN");
        assert_eq!(
            document_mode_for_doctype(Some("html"), public, None, false),
            DocumentMode::Quirks
        );
        assert_eq!(
            document_mode_for_doctype(
                Some("html"),
                public,
                Some("http://www.w3.org/TR/html4/frameset.dtd"),
                false
            ),
            DocumentMode::LimitedQuirks
        );
    }

    #[test]
    fn test_xhtml_transitional_is_limited_quirks() {
        assert_eq!(
            document_mode_for_doctype(
                Some("html"),
                Some("-//W3C//DTD XHTML 1.0 Transitional//EN"),
                Some("http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd"),
                false
            ),
            DocumentMode::LimitedQuirks
        );
    }

    #[test]
    fn test_ibm_system_id_is_quirks() {
        assert_eq!(
            document_mode_for_doctype(
                Some("html"),
                None,
                Some("HTTP://WWW.IBM.COM/DATA/DTD/V11/IBMXHTML1-TRANSITIONAL.DTD"),
                false
            ),
            DocumentMode::Quirks
        );
    }

    #[test]
    fn test_html401_strict_is_no_quirks() {
        assert_eq!(
            document_mode_for_doctype(
                Some("html"),
                Some("-//W3C//DTD HTML 4.01//EN"),
                Some("http://www.w3.org/TR/html4/strict.dtd"),
                false
            ),
            DocumentMode::NoQuirks
        );
    }

    #[test]
    fn test_conforming_doctypes() {
        assert!(is_conforming_doctype(Some("html"), None, None));
        assert!(is_conforming_doctype(
            Some("html"),
            None,
            Some("about:legacy-compat")
        ));
        assert!(!is_conforming_doctype(
            Some("html"),
            Some("-//W3C//DTD HTML 4.01//EN"),
            None
        ));
    }
}
