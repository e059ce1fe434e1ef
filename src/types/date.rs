use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Medium-length date rendering, e.g. "Dec 16, 1775".
const DATE_MED: &str = "%b %-d, %Y";

/// A calendar date with no time-of-day, possibly absent.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalDate(pub Option<NaiveDate>);

impl OptionalDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self(NaiveDate::from_ymd_opt(year, month, day))
    }

    /// Medium-format rendering, `None` when the date is absent.
    pub fn formatted(&self) -> Option<String> {
        self.0.map(|date| date.format(DATE_MED).to_string())
    }
}

impl sqlx::Type<sqlx::Sqlite> for OptionalDate {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <&i8 as sqlx::Type<sqlx::Sqlite>>::type_info()
    }
}

// Stored as days from the Common Era, with i64::MIN marking an absent
// date. Day 0 is a real date (0000-12-31, proleptic Gregorian), so the
// sentinel has to sit outside the representable range.
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for OptionalDate {
    fn encode_by_ref(
        &self,
        args: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> sqlx::encode::IsNull {
        args.push(sqlx::sqlite::SqliteArgumentValue::Int64(match self.0 {
            None => i64::MIN,
            Some(date) => i64::from(date.num_days_from_ce()),
        }));

        sqlx::encode::IsNull::No
    }
}

impl<'r, DB: sqlx::Database> sqlx::Decode<'r, DB> for OptionalDate
where
    i64: sqlx::Decode<'r, DB>,
{
    fn decode(
        value: <DB as sqlx::database::HasValueRef<'r>>::ValueRef,
    ) -> Result<Self, Box<dyn std::error::Error + 'static + Send + Sync>> {
        let value = <i64 as sqlx::Decode<DB>>::decode(value)?;
        if value == i64::MIN {
            return Ok(Self(None));
        }
        // Unrepresentable stored values degrade to an absent date.
        let date = i32::try_from(value)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt);
        Ok(Self(date))
    }
}
