use crate::condition::Cond;
use crate::seq::Lazy;
use crate::Pipe;

#[derive(Debug, PartialEq)]
pub(crate) enum Op {
    /* **************************************** 转换 **************************************** */
    /// :upper      转为大写。
    Upper,
    /// :lower      转为小写。
    Lower,
    /// :replace <from> <to>[ <count>]
    Replace { from: String, to: String, count: Option<usize> },
    /// :index      在每个值之前加上从0开始的序号。
    Index,
    /* **************************************** 选择 **************************************** */
    /// :filter <cond>
    Filter(Cond),
    /// :reject <cond>
    Reject(Cond),
    /// :take <n>
    Take(usize),
    /// :drop <n>
    Drop(usize),
    /* **************************************** 展开 **************************************** */
    /// :chars      拆分为单个字符。
    Chars,
    /// :split <sep>
    Split(String),
}

impl Op {
    pub(crate) fn wrap(self, pipe: Pipe) -> Pipe {
        match self {
            Op::Upper => pipe.map(|item, _| item.to_uppercase()).boxed(),
            Op::Lower => pipe.map(|item, _| item.to_lowercase()).boxed(),
            Op::Replace { from, to, count } => match count {
                Some(0) => pipe,
                Some(count) => pipe.map(move |item, _| item.replacen(&from, &to, count)).boxed(),
                None => pipe.map(move |item, _| item.replace(&from, &to)).boxed(),
            },
            Op::Index => pipe.map(|item, index| format!("{index}\t{item}")).boxed(),
            Op::Filter(cond) => pipe.filter(move |item| cond.test(item)).boxed(),
            Op::Reject(cond) => pipe.filter(move |item| !cond.test(item)).boxed(),
            Op::Take(n) => pipe.take(n).boxed(),
            Op::Drop(n) => pipe.drop(n).boxed(),
            Op::Chars => pipe.flat_map(|item| Lazy::of(item.chars().map(String::from).collect::<Vec<_>>())).boxed(),
            Op::Split(sep) => {
                pipe.flat_map(move |item| Lazy::of(item.split(&sep).map(String::from).collect::<Vec<_>>())).boxed()
            }
        }
    }
}
