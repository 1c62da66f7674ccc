use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 映画ID（UUID v4 文字列）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmId(String);

impl FilmId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn from_string(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FilmId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FilmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 映画レコード
///
/// `Id` と `CreatedTimestamp` はサーバー側で作成時に一度だけ設定される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Film {
    pub id: FilmId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub director: String,
    #[serde(default, with = "release_date")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub rating: i32,
    pub created_timestamp: DateTime<Utc>,
}

impl Film {
    /// 入力値から新しい映画を作成する（ID と作成日時はここで採番）
    pub fn create(input: FilmInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id: FilmId::new(),
            title: input.title,
            director: input.director,
            release_date: input.release_date,
            rating: input.rating,
            created_timestamp: created_at,
        }
    }

    /// 編集可能な項目だけを上書きする
    pub fn apply(&mut self, input: FilmInput) {
        self.title = input.title;
        self.director = input.director;
        self.release_date = input.release_date;
        self.rating = input.rating;
    }
}

/// リクエストボディから受け取る編集可能な項目
///
/// 欠けた項目は既定値になる。`Id` や `CreatedTimestamp` が含まれていても無視する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FilmInput {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub director: String,
    #[serde(with = "release_date")]
    pub release_date: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub rating: i32,
}

impl FilmInput {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `ReleaseDate` のシリアライズ
///
/// 出力は `YYYY-MM-DD`。入力は日付のほか RFC 3339 やタイムゾーンなしの日時も受け付け、日付部分だけを残す。
pub mod release_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const DATE_FORMAT: &str = "%Y-%m-%d";
    const NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        value
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(parse)
            .transpose()
            .map_err(de::Error::custom)
    }

    pub fn parse(value: &str) -> Result<NaiveDate, String> {
        if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
            return Ok(date);
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
            return Ok(timestamp.date_naive());
        }
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, NAIVE_DATETIME_FORMAT) {
            return Ok(timestamp.date());
        }
        Err(format!("invalid release date: {value}"))
    }
}
