/// Integer linear re-map of `value` from `[from_low, from_high]` onto
/// `[to_low, to_high]`, truncating toward zero. Either range may be
/// inverted. A zero-width input range yields `to_low`.
pub fn map_linear(value: i32, from_low: i32, from_high: i32, to_low: i32, to_high: i32) -> i32 {
    let from_span = i64::from(from_high) - i64::from(from_low);
    if from_span == 0 {
        return to_low;
    }
    let to_span = i64::from(to_high) - i64::from(to_low);
    let scaled = (i64::from(value) - i64::from(from_low)) * to_span / from_span;
    (scaled + i64::from(to_low)) as i32
}

/// Linear re-map with the output range widened by one at `to_low` and then
/// shifted back down, so the extreme that truncates to 0 gets a full band
/// instead of a single input value.
///
/// Only correct for the inverted menu pattern (`to_low > to_high`, ending
/// at 0); other orderings keep the same arithmetic and its bias.
pub fn map_discrete(value: i32, from_low: i32, from_high: i32, to_low: i32, to_high: i32) -> i32 {
    let mapped = map_linear(value, from_low, from_high, to_low + 1, to_high);
    if mapped != 0 {
        mapped - 1
    } else {
        mapped
    }
}

/// Menu index for a knob reading, inverted so clockwise rotation walks the
/// menu top to bottom.
pub fn menu_index(sample: i32, analog_max: i32, n_options: usize) -> usize {
    if n_options == 0 {
        return 0;
    }
    let last = n_options as i32 - 1;
    map_discrete(sample, 0, analog_max, last, 0).clamp(0, last) as usize
}

/// Knob reading to a value in `[1, upper]`, highest at the low end of the
/// knob travel.
pub fn knob_value(sample: i32, analog_max: i32, upper: u8) -> u8 {
    let upper = i32::from(upper.max(1));
    map_linear(sample, 0, analog_max, upper, 1).clamp(1, upper) as u8
}
