//! The vendor registry: closed tag set, classification hints, grammars.
//!
//! This table is the sole place new vendor support is added. Registry order
//! is the classification priority; hints shared between vendors ("camp
//! systems") resolve to the earlier entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::report::grammar::{BlockGrammar, DassaultGrammar, GenericGrammar, JetWorksGrammar};

/// Known status-report layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vendor {
    JetWorks,
    Dassault,
    Gulfstream,
    Bombardier,
    Unknown,
}

impl Vendor {
    /// Tag stamped into the SOURCE field.
    pub fn tag(&self) -> &'static str {
        match self {
            Vendor::JetWorks => "JetWorks",
            Vendor::Dassault => "Dassault",
            Vendor::Gulfstream => "Gulfstream",
            Vendor::Bombardier => "Bombardier",
            Vendor::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Vendor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jetworks" => Ok(Vendor::JetWorks),
            "dassault" => Ok(Vendor::Dassault),
            "gulfstream" => Ok(Vendor::Gulfstream),
            "bombardier" => Ok(Vendor::Bombardier),
            "unknown" | "generic" => Ok(Vendor::Unknown),
            other => Err(format!("unknown vendor tag: {other}")),
        }
    }
}

/// One registry entry: tag, classifier hint set, optional grammar.
pub struct VendorSpec {
    pub vendor: Vendor,
    pub hints: &'static [&'static str],
    pub grammar: Option<&'static dyn BlockGrammar>,
}

/// Fixed vendor registry in classification priority order.
pub static REGISTRY: &[VendorSpec] = &[
    VendorSpec {
        vendor: Vendor::JetWorks,
        hints: &["jetworks", "jet works"],
        grammar: Some(&JetWorksGrammar),
    },
    VendorSpec {
        vendor: Vendor::Dassault,
        hints: &["status report", "dassault", "falcon", "camp systems"],
        grammar: Some(&DassaultGrammar),
    },
    VendorSpec {
        vendor: Vendor::Gulfstream,
        hints: &["gulfstream", "gv", "g500", "g550", "camp systems"],
        grammar: None,
    },
    VendorSpec {
        vendor: Vendor::Bombardier,
        hints: &["bombardier", "global", "challenger", "camp systems"],
        grammar: None,
    },
];

static GENERIC: GenericGrammar = GenericGrammar;

/// Tag a classification window with the first vendor whose hint set
/// matches. Pure; repeated calls on the same text agree.
pub fn classify(text: &str) -> Vendor {
    let haystack = text.to_lowercase();
    for spec in REGISTRY {
        if spec.hints.iter().any(|hint| haystack.contains(hint)) {
            return spec.vendor;
        }
    }
    Vendor::Unknown
}

/// Grammar for a vendor tag. Unclassified documents get the generic
/// grammar; vendors without extraction rules yet get none.
pub fn grammar_for(vendor: Vendor) -> Option<&'static dyn BlockGrammar> {
    match vendor {
        Vendor::Unknown => Some(&GENERIC),
        tagged => REGISTRY
            .iter()
            .find(|spec| spec.vendor == tagged)
            .and_then(|spec| spec.grammar),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_keyword() {
        assert_eq!(classify("JetWorks Aviation Status List"), Vendor::JetWorks);
        assert_eq!(classify("FALCON 7X maintenance"), Vendor::Dassault);
        assert_eq!(classify("operated fleet: Challenger 604"), Vendor::Bombardier);
        assert_eq!(classify("nothing recognizable"), Vendor::Unknown);
    }

    #[test]
    fn test_shared_hint_resolves_by_registry_order() {
        // "camp systems" is hinted by three vendors; Dassault is first.
        assert_eq!(classify("CAMP Systems export"), Vendor::Dassault);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let text = "Gulfstream G550 status";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn test_grammar_coverage() {
        assert!(grammar_for(Vendor::JetWorks).is_some());
        assert!(grammar_for(Vendor::Dassault).is_some());
        assert!(grammar_for(Vendor::Gulfstream).is_none());
        assert!(grammar_for(Vendor::Bombardier).is_none());
        assert!(grammar_for(Vendor::Unknown).is_some());
    }

    #[test]
    fn test_vendor_round_trip() {
        assert_eq!("jetworks".parse::<Vendor>(), Ok(Vendor::JetWorks));
        assert_eq!("GENERIC".parse::<Vendor>(), Ok(Vendor::Unknown));
        assert!("ilyushin".parse::<Vendor>().is_err());
        assert_eq!(Vendor::Unknown.tag(), "UNKNOWN");
    }
}
