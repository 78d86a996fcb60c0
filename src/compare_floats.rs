pub fn min_of_2<T: PartialOrd + Copy>(first: T, second: T) -> T {
    if first < second {
        first
    } else {
        second
    }
}

pub fn max_of_2<T: PartialOrd + Copy>(first: T, second: T) -> T {
    if first > second {
        first
    } else {
        second
    }
}

pub(crate) fn clamp<T: PartialOrd + Copy>(value: T, lower: T, upper: T) -> T {
    max_of_2(lower, min_of_2(value, upper))
}
