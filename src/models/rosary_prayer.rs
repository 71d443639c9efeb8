use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosaryPrayer {
    pub id: i64,
    pub prayer_date: String, // ⇔ rosary_prayers.prayer_date (TEXT "YYYY-MM-DD")
    pub mysteries: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}
