use crate::config::Config;
use crate::seq::{BoxSource, Lazy};
use std::iter::Peekable;
use std::str::FromStr;

mod condition;
mod config;
mod err;
mod help;
mod input;
mod op;
mod output;
mod parse;
pub mod seq;

pub use crate::err::LpErr;

pub type Integer = i64;
pub(crate) type Float = f64;

/// 流水线中流动的数据
pub(crate) type Pipe = Lazy<BoxSource<'static, String>>;
pub(crate) type PipeRes = Result<Pipe, LpErr>;

#[derive(Debug, Copy, Clone)]
pub(crate) enum Num {
    Integer(Integer),
    Float(Float),
}

impl From<Integer> for Num {
    fn from(i: Integer) -> Num {
        Num::Integer(i)
    }
}

impl From<Float> for Num {
    fn from(f: Float) -> Num {
        Num::Float(f)
    }
}

impl FromStr for Num {
    type Err = LpErr;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(i) = s.parse::<Integer>() {
            Ok(Num::Integer(i))
        } else if let Ok(f) = s.parse::<Float>()
            && f.is_finite()
        {
            Ok(Num::Float(f))
        } else {
            Err(LpErr::BadArg { cmd: "num", arg: "number", arg_value: s.to_owned() })
        }
    }
}

impl PartialOrd for Num {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (Num::Integer(a), Num::Integer(b)) => a.partial_cmp(b),
            (Num::Float(a), Num::Float(b)) => a.partial_cmp(b),
            (Num::Integer(a), Num::Float(b)) => (*a as Float).partial_cmp(b),
            (Num::Float(a), Num::Integer(b)) => a.partial_cmp(&(*b as Float)),
        }
    }
}

impl PartialEq for Num {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(std::cmp::Ordering::Equal)
    }
}

/// 解析参数并执行流水线：`[options] [input] [op...] [output]`。
pub fn run(mut args: Peekable<impl Iterator<Item = String>>) -> Result<(), LpErr> {
    let configs = parse::args::parse_configs(&mut args);
    config::init_log(&configs);
    if configs.contains(&Config::Help) {
        help::print_help(args.next());
        return Ok(());
    } else if configs.contains(&Config::Version) {
        help::print_version();
        return Ok(());
    }
    let (input, ops, output) = parse::args::parse(args)?;
    if configs.contains(&Config::Verbose) {
        config::print_pipe_info(&input, &ops, &output);
    }
    if configs.contains(&Config::DryRun) {
        return Ok(());
    }
    let mut pipe = input.pipe()?;
    for op in ops {
        log::debug!("wrap op: {op:?}");
        pipe = op.wrap(pipe);
    }
    output.handle(pipe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_from_str() {
        assert_eq!(Ok(Num::Integer(12)), "12".parse::<Num>());
        assert_eq!(Ok(Num::Float(1.5)), "1.5".parse::<Num>());
        assert!("abc".parse::<Num>().is_err());
        assert!("inf".parse::<Num>().is_err());
    }

    #[test]
    fn test_num_cmp() {
        assert!(Num::from(1) < Num::from(1.5));
        assert!(Num::from(2.0) > Num::from(1));
        assert_eq!(Num::from(3), Num::from(3.0));
    }
}
