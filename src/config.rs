use crate::input::Input;
use crate::op::Op;
use crate::output::Output;
use env_logger::Env;
use itertools::Itertools;

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Config {
    /// -V,--version    打印版本信息。
    Version,
    /// -h,--help       打印帮助信息。
    Help,
    /// -v,--verbose    执行之前打印流水线详情，并输出调试日志。
    Verbose,
    /// -d,--dry-run    仅解析流水线，不执行。
    DryRun,
}

/// 日志级别可以通过环境变量`LP_LOG`覆盖。
pub(crate) fn init_log(configs: &[Config]) {
    let default = if configs.contains(&Config::Verbose) { "debug" } else { "warn" };
    // 重复初始化（例如测试中）时忽略
    let _ = env_logger::Builder::from_env(Env::default().filter_or("LP_LOG", default)).try_init();
}

pub(crate) fn print_pipe_info(input: &Input, ops: &[Op], output: &Output) {
    println!("Input:");
    println!("    {:?}", input);
    println!("Op:");
    println!("{}", ops.iter().map(|op| format!("    {:?}", op)).join("\n"));
    println!("Output:");
    println!("    {:?}", output);
}
