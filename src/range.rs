//! 狭い符号付き整数型の全値列挙
//!
//! 生成されるテストは `long` のカウンタで `int` の全範囲を走査します。
//! ここではそれと同じ構成を Rust 側のイテレータとして持ち、境界値
//! （最小値と最大値）がそれぞれ一度だけ現れることを保証します。

use std::iter::FusedIterator;
use std::marker::PhantomData;

/// 列挙対象になる狭い整数型
///
/// `i64` のカウンタから切り詰めで値を得るので、`i64` より狭い型だけを実装する。
pub trait NarrowInt: Copy {
    /// 最小値を広い幅で表したもの
    const MIN_WIDE: i64;
    /// 最大値を広い幅で表したもの
    const MAX_WIDE: i64;
    /// ビット幅
    const BITS: u32;

    /// 上位ビットを捨てて狭い幅に変換
    fn truncate(wide: i64) -> Self;
}

macro_rules! impl_narrow_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NarrowInt for $ty {
                const MIN_WIDE: i64 = <$ty>::MIN as i64;
                const MAX_WIDE: i64 = <$ty>::MAX as i64;
                const BITS: u32 = <$ty>::BITS;

                fn truncate(wide: i64) -> Self {
                    wide as $ty
                }
            }
        )*
    };
}

impl_narrow_int!(i8, i16, i32);

/// 狭い型の全値を昇順に返すイテレータ
///
/// 終端は「最大値 + 1」を `i64` で保持する。狭い型のままでは表現できない値なので、
/// 最大値を返した直後に自然に止まる。
#[derive(Debug, Clone)]
pub struct NarrowValues<T: NarrowInt> {
    next: i64,
    end: i64,
    _marker: PhantomData<T>,
}

impl<T: NarrowInt> NarrowValues<T> {
    pub fn new() -> Self {
        Self {
            next: T::MIN_WIDE,
            end: T::MAX_WIDE + 1,
            _marker: PhantomData,
        }
    }

    /// 残りの値の個数（32ビット環境でも溢れないよう `i64` で返す）
    pub fn remaining(&self) -> i64 {
        self.end - self.next
    }

    /// 次に返す値の広い幅での表現
    pub fn counter(&self) -> i64 {
        self.next
    }
}

impl<T: NarrowInt> Default for NarrowValues<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NarrowInt> Iterator for NarrowValues<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next >= self.end {
            return None;
        }
        let value = T::truncate(self.next);
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T: NarrowInt> DoubleEndedIterator for NarrowValues<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(T::truncate(self.end))
    }
}

impl<T: NarrowInt> FusedIterator for NarrowValues<T> {}

/// `T` の全値を列挙するイテレータを作成
pub fn narrow_values<T: NarrowInt>() -> NarrowValues<T> {
    NarrowValues::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i8_covers_every_value_once() {
        let values: Vec<i8> = narrow_values::<i8>().collect();
        assert_eq!(values.len(), 256);
        assert_eq!(values.first(), Some(&i8::MIN));
        assert_eq!(values.last(), Some(&i8::MAX));
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_i16_count_matches_width() {
        assert_eq!(narrow_values::<i16>().count(), 1 << i16::BITS);
    }

    #[test]
    fn test_i32_boundaries_without_full_scan() {
        let mut values = narrow_values::<i32>();
        assert_eq!(values.remaining(), 1i64 << 32);
        assert_eq!(values.next(), Some(i32::MIN));
        assert_eq!(values.next_back(), Some(i32::MAX));
        assert_eq!(values.next(), Some(i32::MIN + 1));
        assert_eq!(values.next_back(), Some(i32::MAX - 1));
        assert_eq!(values.remaining(), (1i64 << 32) - 4);
    }

    #[test]
    fn test_counter_stops_one_past_max() {
        let mut values = narrow_values::<i8>();
        for _ in values.by_ref() {}
        assert_eq!(values.counter(), i8::MAX as i64 + 1);
        assert_eq!(values.next(), None);
        assert_eq!(values.next_back(), None);
    }

    #[test]
    fn test_meeting_in_the_middle_does_not_duplicate() {
        let mut values = narrow_values::<i8>();
        let mut seen = Vec::new();
        loop {
            match (values.next(), values.next_back()) {
                (Some(a), Some(b)) => {
                    seen.push(a);
                    seen.push(b);
                }
                (Some(a), None) => seen.push(a),
                _ => break,
            }
        }
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 256);
    }
}
