//! 惰性序列适配器。
//!
//! [`Source`]是“拉取下一个元素或报告结束，并可显式关闭”的协议，[`Lazy`]包装任意一个[`Source`]，
//! 在其之上提供可链式组合的惰性转换（`map`/`filter`/`flat_map`/`take`/`drop`）与短路查询
//! （`find`/`some`/`every`），且不破坏底层协议的关闭保证。[`Lazy`]本身也实现了[`Source`]，
//! 因此可以任意深度地嵌套组合。

pub mod helper;
mod source;
mod stage;

use crate::err::LpErr;

pub use source::{Empty, FromFn, FromIter};
pub use stage::{Filter, FlatMap, Map, Skip, Take};

/// 单次拉取的结果
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Pull<T> {
    /// 拉取到一个元素
    Item(T),
    /// 已经结束，之后的拉取也总是结束
    Done,
}

impl<T> Pull<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Pull::Done)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Pull::Item(item) => Some(item),
            Pull::Done => None,
        }
    }
}

impl<T> From<Option<T>> for Pull<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Pull::Done, Pull::Item)
    }
}

/// 可能失败的单次拉取
pub type PullRes<T> = Result<Pull<T>, LpErr>;

/// 迭代源：拉取协议的提供方。
///
/// 两个关闭方法默认什么也不做并直接报告完成，持有资源的源需要自行覆盖。
pub trait Source {
    type Item;

    /// 拉取下一个元素。
    fn pull(&mut self) -> PullRes<Self::Item>;

    /// 正常关闭，之后不会再有拉取。
    fn close_normally(&mut self) -> Result<(), LpErr> {
        Ok(())
    }

    /// 因错误而提前关闭，之后不会再有拉取。
    fn close_with_error(&mut self, _err: &LpErr) -> Result<(), LpErr> {
        Ok(())
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    type Item = S::Item;

    fn pull(&mut self) -> PullRes<Self::Item> {
        (**self).pull()
    }

    fn close_normally(&mut self) -> Result<(), LpErr> {
        (**self).close_normally()
    }

    fn close_with_error(&mut self, err: &LpErr) -> Result<(), LpErr> {
        (**self).close_with_error(err)
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    type Item = S::Item;

    fn pull(&mut self) -> PullRes<Self::Item> {
        (**self).pull()
    }

    fn close_normally(&mut self) -> Result<(), LpErr> {
        (**self).close_normally()
    }

    fn close_with_error(&mut self, err: &LpErr) -> Result<(), LpErr> {
        (**self).close_with_error(err)
    }
}

/// 装箱的迭代源
pub type BoxSource<'a, T> = Box<dyn Source<Item = T> + 'a>;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum State {
    Active,
    /// 源已经报告结束或拉取出错，不再拉取
    Exhausted,
    /// 已经调用过`close`或`throw`
    Closed,
}

/// 惰性序列适配器，独占一个迭代源。
///
/// 链式操作会消耗当前适配器并返回包装了它的新适配器，构造时不会发生任何拉取。
#[derive(Debug)]
pub struct Lazy<S> {
    source: S,
    state: State,
}

impl<T> Lazy<Empty<T>> {
    /// 包装一个已经结束的空源。
    pub fn empty() -> Self {
        Lazy::new(Empty::new())
    }
}

impl<I: Iterator> Lazy<FromIter<I>> {
    /// 包装任意可迭代对象。
    pub fn of(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Lazy::new(FromIter::new(iter))
    }
}

impl<T, F: FnMut() -> PullRes<T>> Lazy<FromFn<F>> {
    /// 包装一个生成器闭包。
    pub fn from_fn(f: F) -> Self {
        Lazy::new(FromFn::new(f))
    }
}

impl<S: Source> Lazy<S> {
    pub fn new(source: S) -> Self {
        Lazy { source, state: State::Active }
    }

    pub fn is_closed(&self) -> bool {
        self.state == State::Closed
    }

    /// 拉取下一个元素。
    ///
    /// 已经结束或关闭后不再触碰底层源，总是返回[`Pull::Done`]；拉取出错后同样视为结束。
    pub fn next(&mut self) -> PullRes<S::Item> {
        if self.state != State::Active {
            return Ok(Pull::Done);
        }
        match self.source.pull() {
            Ok(Pull::Item(item)) => Ok(Pull::Item(item)),
            Ok(Pull::Done) => {
                self.state = State::Exhausted;
                Ok(Pull::Done)
            }
            Err(err) => {
                self.state = State::Exhausted;
                Err(err)
            }
        }
    }

    /// 正常关闭，仅第一次调用会转发给底层源。底层源关闭失败时只记录日志。
    pub fn close(&mut self) -> Pull<()> {
        if self.state != State::Closed {
            self.state = State::Closed;
            if let Err(err) = self.source.close_normally() {
                log::warn!("failed to close source: {err}");
            }
        }
        Pull::Done
    }

    /// 以错误关闭，仅第一次调用会转发给底层源，本身从不失败。
    pub fn throw(&mut self, err: &LpErr) -> Pull<()> {
        if self.state != State::Closed {
            self.state = State::Closed;
            if let Err(close_err) = self.source.close_with_error(err) {
                log::warn!("failed to close source with error `{err}`: {close_err}");
            }
        }
        Pull::Done
    }

    pub fn map<U>(
        self, mut f: impl FnMut(S::Item, usize) -> U,
    ) -> Lazy<Map<S, impl FnMut(S::Item, usize) -> Result<U, LpErr>>> {
        self.try_map(move |item, index| Ok(f(item, index)))
    }

    pub fn try_map<U, F>(self, f: F) -> Lazy<Map<S, F>>
    where
        F: FnMut(S::Item, usize) -> Result<U, LpErr>,
    {
        Lazy::new(Map::new(self, f))
    }

    /// 注意：如果上游无限且始终不满足条件，拉取不会返回。
    pub fn filter(
        self, mut pred: impl FnMut(&S::Item) -> bool,
    ) -> Lazy<Filter<S, impl FnMut(&S::Item) -> Result<bool, LpErr>>> {
        self.try_filter(move |item| Ok(pred(item)))
    }

    pub fn try_filter<F>(self, pred: F) -> Lazy<Filter<S, F>>
    where
        F: FnMut(&S::Item) -> Result<bool, LpErr>,
    {
        Lazy::new(Filter::new(self, pred))
    }

    pub fn flat_map<N: Source>(
        self, mut f: impl FnMut(S::Item) -> N,
    ) -> Lazy<FlatMap<S, impl FnMut(S::Item) -> Result<N, LpErr>, N>> {
        self.try_flat_map(move |item| Ok(f(item)))
    }

    pub fn try_flat_map<N, F>(self, f: F) -> Lazy<FlatMap<S, F, N>>
    where
        N: Source,
        F: FnMut(S::Item) -> Result<N, LpErr>,
    {
        Lazy::new(FlatMap::new(self, f))
    }

    pub fn take(self, n: usize) -> Lazy<Take<S>> {
        Lazy::new(Take::new(self, n))
    }

    pub fn drop(self, n: usize) -> Lazy<Skip<S>> {
        Lazy::new(Skip::new(self, n))
    }

    /// 返回第一个满足条件的元素，一旦找到立即停止拉取。
    pub fn find(&mut self, mut pred: impl FnMut(&S::Item) -> bool) -> Result<Option<S::Item>, LpErr> {
        self.try_find(|item| Ok(pred(item)))
    }

    /// 条件出错时以该错误关闭当前适配器，并原样返回错误。
    pub fn try_find(
        &mut self, mut pred: impl FnMut(&S::Item) -> Result<bool, LpErr>,
    ) -> Result<Option<S::Item>, LpErr> {
        while let Pull::Item(item) = self.next()? {
            match pred(&item) {
                Ok(true) => return Ok(Some(item)),
                Ok(false) => {}
                Err(err) => {
                    self.throw(&err);
                    return Err(err);
                }
            }
        }
        Ok(None)
    }

    pub fn some(&mut self, pred: impl FnMut(&S::Item) -> bool) -> Result<bool, LpErr> {
        self.find(pred).map(|found| found.is_some())
    }

    pub fn try_some(&mut self, pred: impl FnMut(&S::Item) -> Result<bool, LpErr>) -> Result<bool, LpErr> {
        self.try_find(pred).map(|found| found.is_some())
    }

    /// 空序列时为`true`。
    pub fn every(&mut self, mut pred: impl FnMut(&S::Item) -> bool) -> Result<bool, LpErr> {
        self.find(|item| !pred(item)).map(|counterexample| counterexample.is_none())
    }

    pub fn try_every(
        &mut self, mut pred: impl FnMut(&S::Item) -> Result<bool, LpErr>,
    ) -> Result<bool, LpErr> {
        self.try_find(|item| pred(item).map(|res| !res)).map(|counterexample| counterexample.is_none())
    }
}

impl<'a, S: Source + 'a> Lazy<S> {
    /// 擦除具体的阶段类型，便于在运行时拼装流水线。
    pub fn boxed(self) -> Lazy<BoxSource<'a, S::Item>> {
        Lazy::new(Box::new(self))
    }
}

impl<S: Source> Source for Lazy<S> {
    type Item = S::Item;

    fn pull(&mut self) -> PullRes<Self::Item> {
        self.next()
    }

    fn close_normally(&mut self) -> Result<(), LpErr> {
        self.close();
        Ok(())
    }

    fn close_with_error(&mut self, err: &LpErr) -> Result<(), LpErr> {
        self.throw(err);
        Ok(())
    }
}

impl<S: Source> IntoIterator for Lazy<S> {
    type Item = Result<S::Item, LpErr>;
    type IntoIter = IntoIter<S>;

    fn into_iter(self) -> IntoIter<S> {
        IntoIter(self)
    }
}

/// 以标准迭代器的方式消费适配器，拉取出错时产出一次`Err`，之后结束。
#[derive(Debug)]
pub struct IntoIter<S>(Lazy<S>);

impl<S> IntoIter<S> {
    /// 取回适配器，例如在提前放弃迭代后关闭它。
    pub fn into_inner(self) -> Lazy<S> {
        self.0
    }
}

impl<S: Source> Iterator for IntoIter<S> {
    type Item = Result<S::Item, LpErr>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Pull::into_option).transpose()
    }
}
