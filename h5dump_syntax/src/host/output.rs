//! Serializable scan results for hosts outside the process
//!
//! Tags serialize as `{"start":0,"end":4,"class":"warning"}`; fold regions
//! keep `close: null` when the buffer ends inside them.

use crate::folding::{FoldRegion, FoldScan};
use crate::tokens::ClassificationTag;
use serde::{Deserialize, Serialize};

/// Combined classification and folding result for one buffer revision
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOutput {
    pub tags: Vec<ClassificationTag>,
    pub folds: Vec<FoldRegion>,
    pub unbalanced: Vec<usize>,
}

impl ScanOutput {
    pub fn new(tags: Vec<ClassificationTag>, folds: FoldScan) -> Self {
        Self {
            tags,
            folds: folds.regions,
            unbalanced: folds.unbalanced,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folding::FoldScanner;
    use crate::lexical::Classifier;

    #[test]
    fn test_json_shape() {
        let text = "HDF5 \"f\" { GROUP \"/\" {";
        let tags = Classifier::new().unwrap().tags(text);
        let output = ScanOutput::new(tags, FoldScanner::new().scan(text));

        let value: serde_json::Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();
        assert_eq!(value["tags"][0]["start"], 0);
        assert_eq!(value["tags"][0]["end"], 4);
        assert_eq!(value["tags"][0]["class"], "warning");
        assert_eq!(value["tags"][1]["class"], "keyword");
        assert_eq!(value["folds"][0]["open"], 9);
        assert!(value["folds"][0]["close"].is_null());
        assert_eq!(value["folds"][1]["depth"], 1);
        assert_eq!(value["unbalanced"], serde_json::json!([]));
    }

    #[test]
    fn test_from_json_keeps_unterminated_and_stray() {
        let json = r#"{"tags":[{"start":2,"end":7,"class":"keyword"}],"folds":[{"open":0,"close":null,"depth":0}],"unbalanced":[9]}"#;
        let output = ScanOutput::from_json(json).unwrap();

        assert_eq!(output.tags[0].as_triple(), (2, 7, "keyword"));
        assert!(!output.folds[0].is_closed());
        assert_eq!(output.unbalanced, vec![9]);
    }

    #[test]
    fn test_from_json_rejects_unknown_class() {
        let json = r#"{"tags":[{"start":0,"end":1,"class":"comment"}],"folds":[],"unbalanced":[]}"#;
        assert!(ScanOutput::from_json(json).is_err());
    }
}
