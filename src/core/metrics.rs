use serde::Serialize;

/// Formats counts the way profile stats are shown: `980`, `1.5K`, `2.5M`.
pub fn format_number(num: u64) -> String {
    if num >= 1_000_000 {
        return format!("{:.1}M", num as f64 / 1_000_000.0);
    }
    if num >= 1_000 {
        return format!("{:.1}K", num as f64 / 1_000.0);
    }
    num.to_string()
}

/// Cosmetic profile stats derived from a record id.
///
/// Same id, same numbers. They are not real audience data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayMetrics {
    pub video_views: String,
    pub followers: String,
    pub likes: String,
}

impl DisplayMetrics {
    pub fn for_id(id: &str) -> Self {
        let seed = id.trim().parse::<u64>().ok().filter(|&n| n != 0).unwrap_or(1);

        // all three are in thousands
        let video_views = (seed.wrapping_mul(127).wrapping_add(350)) % 900 + 100;
        let followers = (seed.wrapping_mul(89).wrapping_add(15)) % 85 + 15;
        let likes = (seed.wrapping_mul(213).wrapping_add(800)) % 1400 + 600;

        Self {
            video_views: thousands(video_views),
            followers: format!("{}.{}K", followers, seed % 10),
            likes: thousands(likes),
        }
    }
}

fn thousands(value: u64) -> String {
    if value >= 1000 {
        format!("{:.1}M", value as f64 / 1000.0)
    } else {
        format!("{}K", value)
    }
}
