//! # Pattern Library
//!
//! Named grammar fragments and the four anchored patterns built from them.
//!
//! Every fragment is a plain `&'static str` so it can be tested on its own.
//! The composed patterns are assembled with [`optional`] and [`anchored`]
//! and compiled once, on first use, into a process-wide [`Patterns`] value
//! that is never mutated afterwards.
//!
//! ## Composition order
//!
//! The URL pattern is built as:
//!
//! ```text
//! ^ scheme? userinfo? ( ipv4 | [ipv6] | subdomain? label tld? ) \.? port? path? $
//! ```
//!
//! The order is load-bearing: userinfo has to be tried before the host so
//! `user:pass@host` is not read as a host with a port.
//!
//! ## Example
//!
//! ```rust
//! use textcheck::patterns::{self, PHONE};
//!
//! assert!(patterns::patterns().phone.is_match("08119889788"));
//! assert_eq!(PHONE, r"[0-9]{5,}");
//! ```
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Supported URL schemes followed by `://`.
pub const SCHEME: &str = r"((ftp|sftp|tcp|udp|wss?|https?)://)";

/// `user[:password]@`. Whitespace is ASCII only: tab, newline, form feed,
/// carriage return and space.
pub const USERINFO: &str = r"([^\t\n\x0C\r ]+(:[^\t\n\x0C\r ]*)?@)";

/// Path, query or fragment: starts with `/`, `?` or `#`.
pub const PATH: &str = r"((/|\?|#)[^\t\n\x0C\r ]*)";

/// `:` followed by one to five ASCII digits.
pub const PORT: &str = r"(:([0-9]{1,5}))";

/// Dotted IPv4 literal. First octet 1-223, last octet 0-254.
pub const IPV4: &str = r"([1-9][0-9]?|1[0-9][0-9]|2[01][0-9]|22[0-3])(\.(1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])){2}(?:\.([0-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-4]))";

/// IPv6 literal without brackets: full, compressed, link-local with zone,
/// IPv4-mapped and IPv4-embedded forms.
pub const IPV6: &str = concat!(
    r"(",
    r"([0-9a-fA-F]{1,4}:){7,7}[0-9a-fA-F]{1,4}",
    r"|([0-9a-fA-F]{1,4}:){1,7}:",
    r"|([0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}",
    r"|([0-9a-fA-F]{1,4}:){1,5}(:[0-9a-fA-F]{1,4}){1,2}",
    r"|([0-9a-fA-F]{1,4}:){1,4}(:[0-9a-fA-F]{1,4}){1,3}",
    r"|([0-9a-fA-F]{1,4}:){1,3}(:[0-9a-fA-F]{1,4}){1,4}",
    r"|([0-9a-fA-F]{1,4}:){1,2}(:[0-9a-fA-F]{1,4}){1,5}",
    r"|[0-9a-fA-F]{1,4}:((:[0-9a-fA-F]{1,4}){1,6})",
    r"|:((:[0-9a-fA-F]{1,4}){1,7}|:)",
    r"|fe80:(:[0-9a-fA-F]{0,4}){0,4}%[0-9a-zA-Z]{1,}",
    r"|::(ffff(:0{1,4}){0,1}:){0,1}((25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9])\.){3,3}(25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9])",
    r"|([0-9a-fA-F]{1,4}:){1,4}:((25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9])\.){3,3}(25[0-5]|(2[0-4]|1{0,1}[0-9]){0,1}[0-9])",
    r")",
);

/// `www.` or a run of dotted/dashed labels in front of the host label.
pub const SUBDOMAIN: &str = r"((www\.)|([a-zA-Z0-9]([-.][-._a-zA-Z0-9]+)*))";

/// Hostname shaped like `my-host.internal` before the final label.
pub const HOSTNAME: &str = r"([a-zA-Z0-9]([a-zA-Z0-9_-]+)?[a-zA-Z0-9]([-.][a-zA-Z0-9]+)*)";

/// Final host label, letters/digits plus the BMP above U+00A1, dashes inside.
pub const HOST_LABEL: &str = r"(([a-zA-Z\x{00a1}-\x{ffff}0-9]+-?-?)*[a-zA-Z\x{00a1}-\x{ffff}0-9]+)";

/// Optional top-level domain after the host label.
pub const TLD: &str = r"(?:\.([a-zA-Z\x{00a1}-\x{ffff}]{1,}))";

/// `+` and one to five ASCII digits.
pub const PHONE_AREA: &str = r"\+[0-9]{1,5}";

/// Five or more ASCII digits, nothing else.
pub const PHONE: &str = r"[0-9]{5,}";

/// Unicode ranges accepted inside email atoms and labels.
pub const EMAIL_UCS: &str = r"\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";

/// Characters allowed in an unquoted local-part atom.
const EMAIL_ATOM: &str = r"[a-zA-Z0-9!#$%&'*+/=?^_`{|}~\-\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]";

/// Folding white space inside a quoted string.
const EMAIL_FWS: &str = r"(((\x20|\x09)*(\x0d\x0a))?(\x20|\x09)+)";

/// Quoted-string body: qtext or a backslash quoted-pair.
const EMAIL_QCONTENT: &str = r"(([\x01-\x08\x0b\x0c\x0e-\x1f\x7f]|\x21|[\x23-\x5b]|[\x5d-\x7e]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])|(\\([\x01-\x09\x0b\x0c\x0d-\x7f]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])))";

/// Regex size ceiling. The Unicode label classes expand to large automata.
const SIZE_LIMIT: usize = 1 << 24;

/// Wraps a fragment so it may appear zero or one time.
pub fn optional(fragment: &str) -> String {
    format!("{fragment}?")
}

/// Anchors a composed body at both ends.
pub fn anchored(body: &str) -> String {
    format!("^{body}$")
}

/// Dot-atom or quoted-string local part.
pub fn email_local_part() -> String {
    let dot_atom = format!(r"({EMAIL_ATOM}+(\.{EMAIL_ATOM}+)*)");
    let quoted = format!(r"(\x22({fws}?{qc})*{fws}?\x22)", fws = EMAIL_FWS, qc = EMAIL_QCONTENT);
    format!("({dot_atom}|{quoted})")
}

/// Dot-separated labels ending in an alphabetic top-level label.
pub fn email_domain() -> String {
    let alnum = format!(r"[a-zA-Z0-9{EMAIL_UCS}]");
    let alpha = format!(r"[a-zA-Z{EMAIL_UCS}]");
    let inner = format!(r"[a-zA-Z0-9._~{EMAIL_UCS}-]");
    let tld_inner = format!(r"[a-zA-Z0-9_~{EMAIL_UCS}-]");

    let label = format!("(({alnum})|({alnum}{inner}*{alnum}))");
    let top = format!("(({alpha})|({alpha}{tld_inner}*{alpha}))");
    format!(r"({label}\.)+{top}\.?")
}

/// Full anchored email source.
pub fn email_source() -> String {
    anchored(&format!("{}@{}", email_local_part(), email_domain()))
}

/// Full anchored URL source.
pub fn url_source() -> String {
    let named_host = format!(
        "(({HOSTNAME})|({}))?{HOST_LABEL}{}",
        optional(SUBDOMAIN),
        optional(TLD)
    );
    let host = format!(r"(({IPV4})|(\[{IPV6}\])|({named_host}))");

    let mut body = String::new();
    body.push_str(&optional(SCHEME));
    body.push_str(&optional(USERINFO));
    body.push_str(&host);
    body.push_str(&optional(r"\."));
    body.push_str(&optional(PORT));
    body.push_str(&optional(PATH));
    anchored(&body)
}

fn compile(source: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(source).size_limit(SIZE_LIMIT).build()
}

/// Compiled, read-only matchers for every supported format.
#[derive(Debug, Clone)]
pub struct Patterns {
    pub email: Regex,
    pub url: Regex,
    pub phone: Regex,
    pub phone_area: Regex,
}

impl Patterns {
    /// Composes and compiles every pattern.
    pub fn compile() -> Result<Patterns, regex::Error> {
        let patterns = Patterns {
            email: compile(&email_source())?,
            url: compile(&url_source())?,
            phone: compile(&anchored(PHONE))?,
            phone_area: compile(&anchored(PHONE_AREA))?,
        };
        tracing::debug!("format patterns compiled");
        Ok(patterns)
    }
}

static PATTERNS: LazyLock<Patterns> =
    LazyLock::new(|| Patterns::compile().expect("built-in format patterns must compile"));

/// Process-wide compiled patterns, built on first call.
pub fn patterns() -> &'static Patterns {
    &PATTERNS
}
