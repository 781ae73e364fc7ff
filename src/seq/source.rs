use crate::seq::{Pull, PullRes, Source};
use std::marker::PhantomData;

/// 空源，第一次拉取即结束。
#[derive(Debug)]
pub struct Empty<T>(PhantomData<T>);

impl<T> Empty<T> {
    pub fn new() -> Empty<T> {
        Empty(PhantomData)
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Empty::new()
    }
}

impl<T> Source for Empty<T> {
    type Item = T;

    fn pull(&mut self) -> PullRes<T> {
        Ok(Pull::Done)
    }
}

/// 基于标准迭代器的源，例如数组游标。
#[derive(Debug)]
pub struct FromIter<I> {
    iter: I,
}

impl<I: Iterator> FromIter<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> FromIter<I> {
        FromIter { iter: iter.into_iter() }
    }
}

impl<I: Iterator> Source for FromIter<I> {
    type Item = I::Item;

    fn pull(&mut self) -> PullRes<I::Item> {
        Ok(self.iter.next().into())
    }
}

/// 基于生成器闭包的源，闭包可以报告失败。
pub struct FromFn<F> {
    f: F,
}

impl<F> FromFn<F> {
    pub fn new(f: F) -> FromFn<F> {
        FromFn { f }
    }
}

impl<T, F: FnMut() -> PullRes<T>> Source for FromFn<F> {
    type Item = T;

    fn pull(&mut self) -> PullRes<T> {
        (self.f)()
    }
}
