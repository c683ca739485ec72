use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::core::params::PolygonParams;
use crate::error::{Error, Result};
use crate::types::Vec2;

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?\d+\.?\d*").expect("number pattern is valid")
});

/// Outcome of translating every array literal in a text buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonReport {
    pub arrays: usize,
    pub pairs: usize,
    pub offset: Vec2,
    pub content: String,
}

/// Parse the body of an array literal into `(x, y)` pairs.
pub fn parse_pairs(body: &str, index: usize) -> Result<Vec<Vec2>> {
    let numbers = NUMBER_RE
        .find_iter(body)
        .map(|m| {
            m.as_str().parse::<f64>().map_err(|_| Error::InvalidArgument {
                arg: "coordinate",
                value: m.as_str().to_string(),
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    if numbers.len() % 2 != 0 {
        return Err(Error::UnpairedCoordinate {
            index,
            count: numbers.len(),
        });
    }

    Ok(numbers
        .chunks_exact(2)
        .map(|xy| Vec2::new(xy[0], xy[1]))
        .collect())
}

pub fn format_array(literal: &str, pairs: &[Vec2]) -> String {
    let body = pairs
        .iter()
        .map(Vec2::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}({})", literal, body)
}

/// Add `params.offset` to every pair of every `literal(...)` array.
///
/// Fails without producing output if any array has an odd value count.
pub fn translate_arrays(content: &str, params: &PolygonParams) -> Result<PolygonReport> {
    let array_re = Regex::new(&format!(r"{}\(([^)]+)\)", regex::escape(&params.literal)))?;

    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    let mut arrays = 0;
    let mut pairs = 0;

    for (index, caps) in array_re.captures_iter(content).enumerate() {
        let (Some(whole), Some(body)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let translated: Vec<Vec2> = parse_pairs(body.as_str(), index)?
            .into_iter()
            .map(|p| p.offset(params.offset))
            .collect();

        debug!("Array #{}: {} pair(s)", index, translated.len());

        out.push_str(&content[last..whole.start()]);
        out.push_str(&format_array(&params.literal, &translated));
        last = whole.end();
        arrays += 1;
        pairs += translated.len();
    }
    out.push_str(&content[last..]);

    Ok(PolygonReport {
        arrays,
        pairs,
        offset: params.offset,
        content: out,
    })
}
