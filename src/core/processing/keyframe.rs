//! Lexical rewrites of 2-component keyframe literals such as `Vector2(407, 280)`.
//!
//! The scene text is never parsed; literals are found by regular expression.
//! Anything else in the file with the same textual shape is rewritten too.
use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::core::params::{AbsoluteRewriteParams, BaselineRewriteParams};
use crate::error::Result;
use crate::types::BaselineScope;

/// Outcome of one keyframe rewrite pass over a text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyframeReport {
    /// Targeted literals found before rewriting
    pub before: usize,
    /// Targeted literals still present after rewriting
    pub after: usize,
    pub replaced: usize,
    /// Literals rewritten although they were outside the reporting band
    pub out_of_band: usize,
    pub content: String,
}

impl KeyframeReport {
    pub fn remaining(&self) -> usize {
        self.after
    }
}

/// Replace the first component `from_x` with `to_x`, keeping the second verbatim.
pub fn rewrite_absolute_x(content: &str, params: &AbsoluteRewriteParams) -> Result<KeyframeReport> {
    let literal = regex::escape(&params.literal);
    let from_x = regex::escape(&params.from_x.to_string());
    let count_re = Regex::new(&format!(r"{}\({},", literal, from_x))?;
    let rewrite_re = Regex::new(&format!(r"{}\({},\s*(\d+(?:\.\d+)?)\)", literal, from_x))?;

    let before = count_re.find_iter(content).count();
    debug!("Found {} instances of {}({}, ...)", before, params.literal, params.from_x);

    let rewritten = rewrite_re
        .replace_all(content, |caps: &Captures| {
            format!("{}({}, {})", params.literal, params.to_x, &caps[1])
        })
        .into_owned();

    let after = count_re.find_iter(&rewritten).count();

    Ok(KeyframeReport {
        before,
        after,
        replaced: before.saturating_sub(after),
        out_of_band: 0,
        content: rewritten,
    })
}

/// Subtract `baseline` from the second component of every `literal(x, N)`.
///
/// With [`BaselineScope::All`] every match is rebased, including values
/// outside the band; those are counted in `out_of_band`.
pub fn rebase_y(content: &str, params: &BaselineRewriteParams) -> Result<KeyframeReport> {
    let literal = regex::escape(&params.literal);
    let x = regex::escape(&params.x.to_string());
    let rewrite_re = Regex::new(&format!(r"{}\({},\s*(\d+)\)", literal, x))?;

    let count_band = |text: &str| {
        rewrite_re
            .captures_iter(text)
            .filter_map(|caps| caps[1].parse::<i64>().ok())
            .filter(|&v| params.in_band(v))
            .count()
    };

    let before = count_band(content);
    debug!(
        "Found {} instances of {}({}, {}-{})",
        before, params.literal, params.x, params.band.0, params.band.1
    );

    let mut out_of_band = 0;
    let rewritten = rewrite_re
        .replace_all(content, |caps: &Captures| {
            let Ok(value) = caps[1].parse::<i64>() else {
                warn!("Leaving unparseable literal untouched: {}", &caps[0]);
                return caps[0].to_string();
            };
            let in_band = params.in_band(value);
            if !in_band && params.scope == BaselineScope::Band {
                return caps[0].to_string();
            }
            if !in_band {
                out_of_band += 1;
            }
            format!("{}({}, {})", params.literal, params.x, value - params.baseline)
        })
        .into_owned();

    if out_of_band > 0 {
        warn!(
            "Rebased {} literal(s) outside the {}-{} band",
            out_of_band, params.band.0, params.band.1
        );
    }

    let after = count_band(&rewritten);

    Ok(KeyframeReport {
        before,
        after,
        replaced: before.saturating_sub(after),
        out_of_band,
        content: rewritten,
    })
}
