//! Text input for polynomials.
//!
//! Three forms are accepted:
//!
//! - a bracketed coefficient list, lowest degree first: `[1, -3, 2]`
//! - a FLINT-style length-prefixed list: `3  1 -3 2`
//! - an expression in `x`: `2*x^2 - 3*x + 1`, `x^3 - 1/4`, `3x + 1`
//!
//! A single word without `x`, optionally preceded by a separate sign, is a
//! constant, so `0`, `-3/4` and `- 3/4` read back as constants.
//!
//! Coefficients are integers or fractions `p/q`. Error offsets are byte
//! offsets into the original string.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::str::FromStr;

use super::Polynomial;
use crate::error::{Result, ZeroCountError};

/// Largest exponent accepted in expression form.
const MAX_EXPONENT: usize = 1 << 16;

impl FromStr for Polynomial {
    type Err = ZeroCountError;

    fn from_str(s: &str) -> Result<Self> {
        let base = s.len() - s.trim_start().len();
        let input = s.trim();
        if input.is_empty() {
            return Err(ZeroCountError::parse(0, "empty input"));
        }

        let coeffs = if input.starts_with('[') {
            parse_list(input, base)?
        } else if input.contains(['x', 'X']) {
            parse_expression(input, base)?
        } else if let Some(constant) = signed_constant(input) {
            vec![parse_rational(&constant, base)?]
        } else {
            parse_length_prefixed(input, base)?
        };
        Ok(Polynomial::from_rationals(&coeffs))
    }
}

/// A lone constant with an optional sign: `7`, `-3/4`, `- 3/4`.
fn signed_constant(input: &str) -> Option<String> {
    let (sign, rest) = match input.strip_prefix(['-', '+']) {
        Some(rest) => (&input[..1], rest.trim_start()),
        None => ("", input),
    };
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        return None;
    }
    Some(if sign == "-" {
        format!("-{}", rest)
    } else {
        rest.to_string()
    })
}

/// Parse `p` or `p/q`.
fn parse_rational(token: &str, offset: usize) -> Result<BigRational> {
    let (num, den) = match token.split_once('/') {
        Some((n, d)) => (n.trim(), Some(d.trim())),
        None => (token, None),
    };
    let num = BigInt::from_str(num)
        .map_err(|_| ZeroCountError::parse(offset, format!("invalid coefficient '{}'", token)))?;
    let den = match den {
        Some(d) => BigInt::from_str(d).map_err(|_| {
            ZeroCountError::parse(offset, format!("invalid denominator in '{}'", token))
        })?,
        None => BigInt::one(),
    };
    if den.is_zero() {
        return Err(ZeroCountError::parse(offset, format!("zero denominator in '{}'", token)));
    }
    Ok(BigRational::new(num, den))
}

fn parse_list(input: &str, base: usize) -> Result<Vec<BigRational>> {
    let Some(body) = input
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return Err(ZeroCountError::parse(base + input.len(), "expected closing ']'"));
    };
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut coeffs = Vec::new();
    let mut offset = base + 1;
    for piece in body.split(',') {
        let lead = piece.len() - piece.trim_start().len();
        let token = piece.trim();
        if token.is_empty() {
            return Err(ZeroCountError::parse(offset + lead, "missing coefficient"));
        }
        coeffs.push(parse_rational(token, offset + lead)?);
        offset += piece.len() + 1;
    }
    Ok(coeffs)
}

/// Whitespace-separated words with their byte offsets.
fn words(input: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, ch) in input.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(s)) => {
                out.push((s, &input[s..i]));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        out.push((s, &input[s..]));
    }
    out
}

fn parse_length_prefixed(input: &str, base: usize) -> Result<Vec<BigRational>> {
    let words = words(input);
    let Some(&(len_at, len_word)) = words.first() else {
        return Err(ZeroCountError::parse(base, "empty input"));
    };
    let len: usize = len_word.parse().map_err(|_| {
        ZeroCountError::parse(
            base + len_at,
            format!("expected a coefficient count, found '{}'", len_word),
        )
    })?;
    let found = words.len() - 1;
    if found != len {
        return Err(ZeroCountError::parse(
            base + input.len(),
            format!("expected {} coefficients, found {}", len, found),
        ));
    }
    words[1..]
        .iter()
        .map(|&(at, word)| parse_rational(word, base + at))
        .collect()
}

/// Byte cursor over an ASCII expression.
struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    base: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str, base: usize) -> Self {
        Self { src, pos: 0, base }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn eat(&mut self, byte: u8) -> bool {
        self.skip_ws();
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_variable(&mut self) -> bool {
        self.eat(b'x') || self.eat(b'X')
    }

    fn digits(&mut self) -> Option<&'a str> {
        self.skip_ws();
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        (self.pos > start).then(|| &self.src[start..self.pos])
    }

    fn error(&self, message: impl Into<String>) -> ZeroCountError {
        ZeroCountError::parse(self.base + self.pos, message)
    }
}

fn parse_expression(input: &str, base: usize) -> Result<Vec<BigRational>> {
    let mut cur = Cursor::new(input, base);
    let mut coeffs: Vec<BigRational> = Vec::new();

    let mut negative = if cur.eat(b'-') {
        true
    } else {
        cur.eat(b'+');
        false
    };

    loop {
        let (coeff, power) = parse_term(&mut cur)?;
        if coeffs.len() <= power {
            coeffs.resize(power + 1, BigRational::zero());
        }
        if negative {
            coeffs[power] -= coeff;
        } else {
            coeffs[power] += coeff;
        }

        cur.skip_ws();
        match cur.peek() {
            None => break,
            Some(b'+') => negative = false,
            Some(b'-') => negative = true,
            Some(_) => return Err(cur.error("expected '+' or '-'")),
        }
        cur.pos += 1;
    }
    Ok(coeffs)
}

/// `c`, `c*x^k`, `cx^k`, `x^k` (with `^k` optional).
fn parse_term(cur: &mut Cursor<'_>) -> Result<(BigRational, usize)> {
    let start = cur.base + cur.pos;
    let coeff = match cur.digits() {
        Some(num) => {
            let mut token = num.to_string();
            if cur.eat(b'/') {
                let den = cur.digits().ok_or_else(|| cur.error("expected denominator"))?;
                token = format!("{}/{}", num, den);
            }
            Some(parse_rational(&token, start)?)
        }
        None => None,
    };

    let explicit_product = coeff.is_some() && cur.eat(b'*');
    if !cur.eat_variable() {
        return match coeff {
            Some(c) if !explicit_product => Ok((c, 0)),
            Some(_) => Err(cur.error("expected 'x' after '*'")),
            None => Err(cur.error("expected coefficient or 'x'")),
        };
    }

    let mut power = 1;
    if cur.eat(b'^') {
        let exp = cur.digits().ok_or_else(|| cur.error("expected exponent"))?;
        power = exp
            .parse::<usize>()
            .ok()
            .filter(|&p| p <= MAX_EXPONENT)
            .ok_or_else(|| cur.error(format!("exponent '{}' too large", exp)))?;
    }
    Ok((coeff.unwrap_or_else(BigRational::one), power))
}
