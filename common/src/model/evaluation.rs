use serde::Deserialize;

/// Response body of the evaluation endpoint: the service-computed aggregate
/// plus one entry per gold test case.
///
/// `overall_accuracy_percent` is displayed verbatim — the service already
/// computed it and the client never re-derives it from the case list.
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct EvaluationResult {
    #[serde(default)]
    pub overall_accuracy_percent: String,
    #[serde(default)]
    pub metric: String,
    #[serde(default)]
    pub detailed_results: Vec<EvalCase>,
}

/// One gold test case compared by the service.
///
/// `status` is whatever the service decided from execution-result
/// equivalence; the client treats it as opaque text and only ever asks
/// [`EvalCase::verdict`] for the binary classification.
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct EvalCase {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub generated_sql: String,
    #[serde(default)]
    pub expected_sql: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub debug: Option<String>,
}

/// Binary display classification of a case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseVerdict {
    Pass,
    Fail,
}

impl EvalCase {
    /// The literal status `PASS` is a pass; any other value fails. New
    /// status values the service may grow later land on the failure side.
    pub fn verdict(&self) -> CaseVerdict {
        if self.status == "PASS" {
            CaseVerdict::Pass
        } else {
            CaseVerdict::Fail
        }
    }
}

impl EvaluationResult {
    pub fn passed(&self) -> usize {
        self.detailed_results
            .iter()
            .filter(|case| case.verdict() == CaseVerdict::Pass)
            .count()
    }

    pub fn total(&self) -> usize {
        self.detailed_results.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(status: &str) -> EvalCase {
        EvalCase {
            status: status.to_string(),
            ..EvalCase::default()
        }
    }

    #[test]
    fn only_literal_pass_is_positive() {
        assert_eq!(case("PASS").verdict(), CaseVerdict::Pass);
        assert_eq!(case("FAIL").verdict(), CaseVerdict::Fail);
        assert_eq!(case("TIMEOUT").verdict(), CaseVerdict::Fail);
        assert_eq!(case("pass").verdict(), CaseVerdict::Fail);
        assert_eq!(case("").verdict(), CaseVerdict::Fail);
    }

    #[test]
    fn counts_follow_verdicts_in_order() {
        let report = EvaluationResult {
            overall_accuracy_percent: "50.0%".to_string(),
            metric: "execution accuracy".to_string(),
            detailed_results: vec![case("PASS"), case("TIMEOUT")],
        };
        assert_eq!(report.passed(), 1);
        assert_eq!(report.total(), 2);
        assert_eq!(report.detailed_results[0].verdict(), CaseVerdict::Pass);
        assert_eq!(report.detailed_results[1].verdict(), CaseVerdict::Fail);
    }

    #[test]
    fn wire_body_decodes() {
        let body = r#"{
            "overall_accuracy_percent": "66.7%",
            "metric": "execution accuracy",
            "detailed_results": [
                {
                    "question": "List all customers",
                    "generated_sql": "SELECT * FROM api_customer",
                    "expected_sql": "SELECT * FROM api_customer",
                    "status": "PASS"
                },
                {
                    "question": "Top product",
                    "generated_sql": "SELECT nmae FROM api_product",
                    "expected_sql": "SELECT name FROM api_product",
                    "status": "FAIL",
                    "debug": "no such column: nmae"
                }
            ]
        }"#;
        let report: EvaluationResult = serde_json::from_str(body).unwrap();
        assert_eq!(report.overall_accuracy_percent, "66.7%");
        assert_eq!(report.total(), 2);
        assert_eq!(report.passed(), 1);
        assert_eq!(
            report.detailed_results[1].debug.as_deref(),
            Some("no such column: nmae")
        );
    }
}
