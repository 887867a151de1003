/// Copper pieces per silver piece.
pub const COPPER_PER_SILVER: i64 = 100;
/// Copper pieces per gold piece.
pub const COPPER_PER_GOLD: i64 = 100 * COPPER_PER_SILVER;

/// Render a copper amount as `{gold}g {silver}s {copper}c`
pub fn format_copper(copper: i64) -> String {
    let sign = if copper < 0 { "-" } else { "" };
    let copper = copper.unsigned_abs();

    let gold = copper / COPPER_PER_GOLD as u64;
    let silver = (copper % COPPER_PER_GOLD as u64) / COPPER_PER_SILVER as u64;
    let rest = copper % COPPER_PER_SILVER as u64;

    format!("{}{}g {}s {}c", sign, gold, silver, rest)
}
