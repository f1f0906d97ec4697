use thiserror::Error;

#[derive(Debug, Error)]
pub enum DepotError {
    #[error("Failed to start {program}: {source}")]
    Unstartable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed with {}", .code.map_or_else(|| "no exit code".to_string(), |c| format!("exit code {c}")))]
    NonzeroExit { program: String, code: Option<i32> },
}
