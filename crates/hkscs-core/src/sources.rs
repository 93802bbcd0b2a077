//! The versioned revision chain: one source table per HKSCS revision
//!
//! The order of [`REVISIONS`] is a hard invariant. Resolution walks the
//! tables chronologically, and later tables key on codepoints that earlier
//! tables produce (e.g. EC77 in GCCS maps to 4CA4, which HKSCS-2016 remaps
//! again to 9FD0). Reordering the chain silently breaks multi-hop remaps.

use serde::{Deserialize, Serialize};

/// Raw format of a shipped source table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Tab-separated text with a header row
    Tsv,
    /// JSON array of flat objects
    Json,
}

/// Configuration for one revision's source table
#[derive(Debug, Clone)]
pub struct SourceSpec {
    /// Revision name (e.g. "hkscs2004")
    pub name: &'static str,
    /// Raw format of `data`
    pub format: SourceFormat,
    /// Embedded table content
    pub data: &'static str,
    /// Columns holding superseded codepoints, in build order
    pub from_columns: &'static [&'static str],
    /// Column holding the recommended codepoint (or literal character)
    pub to_column: &'static str,
}

/// All revision sources, oldest first
///
/// The ISO/IEC 10646 tables carry two "from" columns because both the 1993
/// and the 2000 editions of the standard placed these characters at
/// codepoints that the later amendment superseded.
pub const REVISIONS: &[SourceSpec] = &[
    SourceSpec {
        name: "gccs",
        format: SourceFormat::Tsv,
        data: include_str!("../data/gccs.tsv"),
        from_columns: &["GCCS"],
        to_column: "Unicode",
    },
    SourceSpec {
        name: "hkscs1999",
        format: SourceFormat::Tsv,
        data: include_str!("../data/hkscs1999.tsv"),
        from_columns: &["UnicodeAlternate"],
        to_column: "Unicode",
    },
    SourceSpec {
        name: "hkscs2001",
        format: SourceFormat::Tsv,
        data: include_str!("../data/hkscs2001.tsv"),
        from_columns: &["UnicodeAlternate"],
        to_column: "Unicode",
    },
    SourceSpec {
        name: "hkscs2001v2",
        format: SourceFormat::Tsv,
        data: include_str!("../data/hkscs2001v2.tsv"),
        from_columns: &["ISO/IEC_10646-1:1993", "ISO/IEC_10646-1:2000"],
        to_column: "ISO/IEC_10646-2:2001",
    },
    SourceSpec {
        name: "hkscs2004",
        format: SourceFormat::Tsv,
        data: include_str!("../data/hkscs2004.tsv"),
        from_columns: &["ISO/IEC_10646-1:1993", "ISO/IEC_10646-1:2000"],
        to_column: "ISO/IEC_10646:2003_Amendment",
    },
    SourceSpec {
        name: "hkscs2008",
        format: SourceFormat::Tsv,
        data: include_str!("../data/hkscs2008.tsv"),
        from_columns: &["ISO/IEC_10646-1:1993", "ISO/IEC_10646-1:2000"],
        to_column: "ISO/IEC_10646:2003_Amendment",
    },
    SourceSpec {
        name: "hkscs2016",
        format: SourceFormat::Json,
        data: include_str!("../data/hkscs2016.json"),
        from_columns: &["codepoint"],
        to_column: "char",
    },
];
