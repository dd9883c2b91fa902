// Copyright 2025 the notation_glyph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph outlines and their interpretation into path-drawing calls.
//!
//! An outline is a flat stream of single-character opcodes, each followed by a fixed
//! number of operands in font units:
//!
//! | Opcode | Operands              | Drawing call                          |
//! |--------|-----------------------|---------------------------------------|
//! | `m`    | `x y`                 | move to `(x, y)`                      |
//! | `l`    | `x y`                 | line to `(x, y)`                      |
//! | `q`    | `cx cy x y`           | quadratic, see [`fill_outline`]       |
//! | `b`    | `x y c1x c1y c2x c2y` | cubic through `c1`, `c2` to `(x, y)`  |

use log::{trace, warn};

use crate::kurbo::Point;
use crate::surface::DrawSurface;
use crate::Error;

/// One element of an outline stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlineToken {
    Op(char),
    Num(f64),
}

/// A glyph's outline instruction stream, in font units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    tokens: Vec<OutlineToken>,
}

impl Outline {
    /// Create an outline from already tokenized data.
    pub fn from_tokens(tokens: Vec<OutlineToken>) -> Self {
        Self { tokens }
    }

    /// Parse the textual form used by glyph sets, e.g. `"m 0 0 l 10 0 l 10 -10"`.
    ///
    /// Tokens are separated by whitespace or commas. Single alphabetic tokens are
    /// opcodes; everything else has to be a finite number.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let tokens = text
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(parse_token)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[OutlineToken] {
        &self.tokens
    }

    /// Number of tokens (opcodes and operands) in the stream.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<OutlineToken> for Outline {
    fn from_iter<I: IntoIterator<Item = OutlineToken>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

fn parse_token(token: &str) -> Result<OutlineToken, Error> {
    let mut chars = token.chars();
    if let (Some(op), None) = (chars.next(), chars.next()) {
        if op.is_ascii_alphabetic() {
            return Ok(OutlineToken::Op(op));
        }
    }
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(OutlineToken::Num(value)),
        _ => Err(Error::MalformedOutline {
            token: token.to_owned(),
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opcode {
    Move,
    Line,
    Quad,
    Cubic,
}

impl Opcode {
    fn decode(op: char) -> Option<Self> {
        match op {
            'm' => Some(Self::Move),
            'l' => Some(Self::Line),
            'q' => Some(Self::Quad),
            'b' => Some(Self::Cubic),
            _ => None,
        }
    }

    fn arity(self) -> usize {
        match self {
            Self::Move | Self::Line => 2,
            Self::Quad => 4,
            Self::Cubic => 6,
        }
    }
}

/// Draw `outline` as a single filled path on `surface`.
///
/// Every operand pair `(x, y)` maps to `origin + (x * scale, y * -scale)`, so the
/// font's upward y axis points down on the surface. The path starts with a move to
/// `origin` itself.
///
/// The quadratic operands are read as control point then end point, but handed to
/// [`DrawSurface::quad_to`] as `(end, control)`. Glyph sets are authored against
/// this pairing; swapping it changes the rendered shapes.
///
/// Unknown opcodes are skipped along with any operands that follow them, and an
/// instruction cut short by the end of the stream (or by the next opcode) is dropped.
/// Both are logged as warnings.
pub fn fill_outline<S: DrawSurface + ?Sized>(
    surface: &mut S,
    outline: &Outline,
    scale: f64,
    origin: Point,
) {
    trace!(
        "filling outline of {} tokens at {origin:?}, scale {scale}",
        outline.len()
    );
    let to_screen = |x: f64, y: f64| Point::new(origin.x + x * scale, origin.y + y * -scale);

    surface.begin_path();
    surface.move_to(origin);

    let tokens = outline.tokens();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        i += 1;
        let op = match token {
            OutlineToken::Op(op) => op,
            OutlineToken::Num(value) => {
                trace!("skipping stray outline operand {value}");
                continue;
            }
        };
        let Some(opcode) = Opcode::decode(op) else {
            warn!("skipping unknown outline opcode `{op}`");
            continue;
        };

        let arity = opcode.arity();
        let mut operands = [0.0; 6];
        let mut taken = 0;
        while taken < arity {
            match tokens.get(i + taken) {
                Some(OutlineToken::Num(value)) => operands[taken] = *value,
                _ => break,
            }
            taken += 1;
        }
        i += taken;
        if taken < arity {
            warn!("dropping truncated outline instruction `{op}` ({taken} of {arity} operands)");
            continue;
        }

        let p = |n: usize| to_screen(operands[2 * n], operands[2 * n + 1]);
        match opcode {
            Opcode::Move => surface.move_to(p(0)),
            Opcode::Line => surface.line_to(p(0)),
            Opcode::Quad => surface.quad_to(p(1), p(0)),
            Opcode::Cubic => surface.curve_to(p(1), p(2), p(0)),
        }
    }

    surface.fill();
}
