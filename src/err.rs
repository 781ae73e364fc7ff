use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LpErr {
    /* **************************************** 序列 **************************************** */
    /// 迭代源拉取失败
    #[error("[Source] {0}")]
    Source(String),

    /// 转换函数或条件执行失败
    #[error("[Callback] {0}")]
    Callback(String),

    /// 调用方主动中止消费
    #[error("[Aborted] {0}")]
    Aborted(String),

    /* **************************************** 参数 **************************************** */
    #[error("[Arg Parse Err] Unable to parse `{arg_value}` in argument `{arg}` of cmd `{cmd}`, error: {error}")]
    ArgParseErr { cmd: &'static str, arg: &'static str, arg_value: String, error: String },

    #[error("[Bad Arg] Bad value `{arg_value}` in argument `{arg}` of cmd `{cmd}`")]
    BadArg { cmd: &'static str, arg: &'static str, arg_value: String },

    #[error("[Missing Arg] Missing argument `{arg}` of cmd `{cmd}`")]
    MissingArg { cmd: &'static str, arg: &'static str },

    #[error("[Bad Arg] Unknown arguments: {args:?}")]
    UnknownArgs { args: Vec<String> },

    #[error("[Bad Arg] Invalid regex `{reg}`: {err}")]
    ParseRegexErr { reg: String, err: String },

    /* **************************************** 读写 **************************************** */
    #[error("[IO] Unable to open file `{file}`: {err}")]
    OpenFileErr { file: String, err: String },

    #[error("[IO] Unable to read file `{file}`: {err}")]
    ReadFileErr { file: String, err: String },

    #[error("[IO] Unable to read stdin: {0}")]
    ReadStdInErr(String),

    #[error("[IO] Unable to write `{item}` to file `{file}`: {err}")]
    WriteToFileErr { file: String, item: String, err: String },
}

impl LpErr {
    /// 进程退出码
    pub fn exit_code(&self) -> u8 {
        match self {
            LpErr::Source(_) => 10,
            LpErr::Callback(_) => 11,
            LpErr::Aborted(_) => 12,
            LpErr::ArgParseErr { .. } => 20,
            LpErr::BadArg { .. } => 21,
            LpErr::MissingArg { .. } => 22,
            LpErr::UnknownArgs { .. } => 23,
            LpErr::ParseRegexErr { .. } => 24,
            LpErr::OpenFileErr { .. } => 30,
            LpErr::ReadFileErr { .. } => 31,
            LpErr::ReadStdInErr(_) => 32,
            LpErr::WriteToFileErr { .. } => 33,
        }
    }
}
