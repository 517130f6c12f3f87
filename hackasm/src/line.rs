use libhack::ADDRESS_MAX;

use crate::{constants::COMMENT, error::ErrorKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    Literal(u16),
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Address(Symbol),
    Label(String),
    Compute {
        dest: String,
        comp: String,
        jump: String,
    },
}

#[derive(Debug, Clone)]
pub struct ParsedLine {
    pub line_no: usize,
    /// Instruction text with whitespace and comments removed.
    pub text: String,
    /// The line as written, used in error reports.
    pub source: String,
    pub kind: LineKind,
    /// ROM address of the instruction, or the address a label binds to.
    pub address: u16,
}

/// Strip the comment and surrounding whitespace. Returns `None` for lines
/// that hold no instruction.
pub fn normalize(raw: &str) -> Option<&str> {
    let line = match raw.find(COMMENT) {
        Some(idx) => &raw[..idx],
        None => raw,
    };
    let line = line.trim();
    (!line.is_empty()).then_some(line)
}

pub fn classify(line: &str) -> Result<LineKind, ErrorKind> {
    if let Some(symbol) = line.strip_prefix('@') {
        return parse_symbol(symbol).map(LineKind::Address);
    }

    if line.len() >= 2 && line.starts_with('(') && line.ends_with(')') {
        return match parse_symbol(&line[1..line.len() - 1])? {
            Symbol::Name(name) => Ok(LineKind::Label(name)),
            Symbol::Literal(_) => Err(ErrorKind::Malformed(format!(
                "label `{}` must not be numeric",
                line
            ))),
        };
    }

    let (dest, rest) = match line.split_once('=') {
        Some((dest, rest)) => (dest.trim(), rest),
        None => ("", line),
    };
    let (comp, jump) = match rest.split_once(';') {
        Some((comp, jump)) => (comp.trim(), jump.trim()),
        None => (rest.trim(), ""),
    };

    if comp.is_empty() {
        return Err(ErrorKind::Malformed("missing computation".to_owned()));
    }

    Ok(LineKind::Compute {
        dest: dest.to_owned(),
        comp: comp.to_owned(),
        jump: jump.to_owned(),
    })
}

fn parse_symbol(symbol: &str) -> Result<Symbol, ErrorKind> {
    if symbol.is_empty() {
        return Err(ErrorKind::Malformed("empty symbol".to_owned()));
    }

    if symbol.chars().all(|c| c.is_ascii_digit()) {
        return symbol
            .parse::<u16>()
            .ok()
            .filter(|value| *value <= ADDRESS_MAX)
            .map(Symbol::Literal)
            .ok_or_else(|| ErrorKind::LiteralOutOfRange(symbol.to_owned()));
    }

    Ok(Symbol::Name(symbol.to_owned()))
}
