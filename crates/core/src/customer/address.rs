//! Mailbox parsing following the RFC 5322 address grammar.
//!
//! Accepts either a bare `addr-spec` (`local@domain`) or a `name-addr`
//! (`Display Name <local@domain>`). Comments, folding whitespace inside the
//! address and domain literals are not supported.

/// Parses a single mailbox and returns its `local@domain` address.
///
/// Returns `None` when the input is not exactly one well-formed mailbox.
///
/// # Examples
///
/// ```
/// use crm_core::customer::parse_address;
///
/// assert_eq!(parse_address("jorge@corp.com").as_deref(), Some("jorge@corp.com"));
/// assert_eq!(
///     parse_address("Jorge Luis <jorge@corp.com>").as_deref(),
///     Some("jorge@corp.com")
/// );
/// assert_eq!(parse_address("not-an-email"), None);
/// ```
pub fn parse_address(input: &str) -> Option<String> {
    let mut parser = Parser {
        rest: input.trim(),
    };
    let address = parser.mailbox()?;
    parser.skip_space();
    parser.rest.is_empty().then_some(address)
}

/// `atext` from RFC 5322, extended to non-ASCII characters (RFC 6532).
fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c) || !c.is_ascii()
}

struct Parser<'a> {
    rest: &'a str,
}

impl<'a> Parser<'a> {
    fn mailbox(&mut self) -> Option<String> {
        let start = self.rest;
        let bare = self.addr_spec();
        if let Some(address) = bare {
            if self.rest.trim_start().is_empty() {
                return Some(address);
            }
        }
        self.rest = start;

        // name-addr; the display name is optional
        if !self.rest.starts_with('<') {
            self.phrase()?;
            self.skip_space();
        }
        self.consume('<')?;
        let address = self.addr_spec()?;
        self.consume('>')?;
        Some(address)
    }

    fn addr_spec(&mut self) -> Option<String> {
        let local = if self.rest.starts_with('"') {
            self.quoted_string().filter(|quoted| quoted.len() > 2)?
        } else {
            self.dot_atom()?
        };
        self.consume('@')?;
        let domain = self.dot_atom()?;
        Some(format!("{local}@{domain}"))
    }

    /// One or more `atext` runs separated by single dots.
    fn dot_atom(&mut self) -> Option<&'a str> {
        let rest = self.rest;
        let end = rest
            .find(|c: char| !(is_atext(c) || c == '.'))
            .unwrap_or(rest.len());
        let atom = &rest[..end];
        if atom.is_empty() || atom.split('.').any(str::is_empty) {
            return None;
        }
        self.rest = &rest[end..];
        Some(atom)
    }

    /// A double-quoted string, returned with its quotes.
    fn quoted_string(&mut self) -> Option<&'a str> {
        let rest = self.rest;
        let body = rest.strip_prefix('"')?;
        let mut escaped = false;
        for (i, c) in body.char_indices() {
            if escaped {
                escaped = false;
                continue;
            }
            match c {
                '\\' => escaped = true,
                '"' => {
                    let end = i + 2;
                    self.rest = &rest[end..];
                    return Some(&rest[..end]);
                }
                c if c.is_control() && c != '\t' => return None,
                _ => {}
            }
        }
        None
    }

    /// Display name: words made of atoms (periods allowed) or quoted strings.
    fn phrase(&mut self) -> Option<()> {
        let mut words = 0;
        loop {
            self.skip_space();
            if self.rest.starts_with('"') {
                self.quoted_string()?;
            } else {
                let rest = self.rest;
                let end = rest
                    .find(|c: char| !(is_atext(c) || c == '.'))
                    .unwrap_or(rest.len());
                if end == 0 {
                    break;
                }
                self.rest = &rest[end..];
            }
            words += 1;
        }
        (words > 0).then_some(())
    }

    fn consume(&mut self, expected: char) -> Option<()> {
        self.rest = self.rest.strip_prefix(expected)?;
        Some(())
    }

    fn skip_space(&mut self) {
        self.rest = self.rest.trim_start();
    }
}
