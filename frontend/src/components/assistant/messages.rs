use common::model::ask::AskResult;
use common::model::evaluation::EvaluationResult;

pub enum Msg {
    UpdateQuestion(String),
    RunQuestion,
    AskSettled {
        token: u64,
        result: Result<AskResult, String>,
    },
    LoadSchema,
    SchemaSettled {
        token: u64,
        result: Result<String, String>,
    },
    RunEvaluation,
    EvaluationSettled {
        token: u64,
        result: Result<EvaluationResult, String>,
    },
}
