use crate::museum::Museum;

/// Checks whether a museum is known to be open at the reference year
///
/// A museum is open at year `d` iff `year_opened_high <= d` and
/// `year_closed_low > d` (or the closing year is NaN, meaning no closure
/// was recorded). The inclusion interval is therefore
/// `[year_opened_high, year_closed_low)`.
///
/// The source data carried inconsistent boundary comparisons across call
/// sites; this crate fixes them to the half-open interval above and uses
/// it everywhere. A NaN opening year fails the first comparison, so rows
/// with no recorded opening are never shown as open.
pub fn open_at(museum: &Museum, year: f64) -> bool {
    museum.year_opened_high <= year
        && (museum.year_closed_low.is_nan() || museum.year_closed_low > year)
}
