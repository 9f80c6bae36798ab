//! Wire format of CMS entries
//!
//! Entries arrive as `{ id, attributes: {...} }` and relations as
//! `{ data: entry | [entry] | null }`. These types only exist to unwrap that
//! nesting into [`ContentRecord`] and [`CategoryRef`].

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::record::{CategoryRef, ContentRecord, CoverImage};
use crate::api::FetchError;
use crate::render::TrustedHtml;

#[derive(Deserialize)]
struct RecordDto {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    attributes: RecordAttributes,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct RecordAttributes {
    title: Option<String>,
    slug: Option<String>,
    description: Option<String>,
    content: Option<String>,
    cover: Option<MediaRelation>,
    categories: Option<CategoryRelation>,
    published_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct MediaRelation {
    #[serde(default)]
    data: Option<MediaDto>,
}

#[derive(Deserialize)]
struct MediaDto {
    #[serde(default)]
    attributes: MediaAttributes,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct MediaAttributes {
    url: String,
    width: Option<u32>,
    height: Option<u32>,
    alternative_text: Option<String>,
}

#[derive(Deserialize)]
struct CategoryRelation {
    #[serde(default)]
    data: Option<Vec<CategoryDto>>,
}

#[derive(Deserialize)]
struct CategoryDto {
    #[serde(default)]
    attributes: CategoryAttributes,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct CategoryAttributes {
    name: String,
}

impl RecordDto {
    fn into_record(self) -> ContentRecord {
        let attributes = self.attributes;
        let cover = attributes
            .cover
            .and_then(|relation| relation.data)
            .map(|media| media.attributes)
            .filter(|media| !media.url.is_empty())
            .map(|media| CoverImage {
                url: media.url,
                width: media.width,
                height: media.height,
                alternative_text: media.alternative_text,
            });
        let categories = attributes
            .categories
            .and_then(|relation| relation.data)
            .unwrap_or_default()
            .into_iter()
            .map(CategoryDto::into_category)
            .collect();

        ContentRecord {
            id: self.id,
            title: attributes.title.unwrap_or_default(),
            slug: attributes.slug.unwrap_or_default(),
            description: attributes.description.unwrap_or_default(),
            content: TrustedHtml::from_cms(attributes.content.unwrap_or_default()),
            cover,
            categories,
            published_at: attributes.published_at,
        }
    }
}

impl CategoryDto {
    fn into_category(self) -> CategoryRef {
        CategoryRef {
            name: self.attributes.name,
        }
    }
}

fn decode_error(error: serde_json::Error) -> FetchError {
    FetchError::Parse(format!("unexpected CMS entry shape: {}", error))
}

/// Decode the payload of a single-record lookup
///
/// Single types answer with an object, slug lookups with an array of zero or
/// one element; `null` and `[]` both mean "absent".
pub(crate) fn decode_one(data: Value) -> Result<Option<ContentRecord>, FetchError> {
    let entry = match data {
        Value::Null => return Ok(None),
        Value::Array(entries) => match entries.into_iter().next() {
            Some(entry) => entry,
            None => return Ok(None),
        },
        entry => entry,
    };

    let dto: RecordDto = serde_json::from_value(entry).map_err(decode_error)?;
    Ok(Some(dto.into_record()))
}

/// Decode the payload of a list query
pub(crate) fn decode_many(data: Value) -> Result<Vec<ContentRecord>, FetchError> {
    if data.is_null() {
        return Ok(Vec::new());
    }
    let dtos: Vec<RecordDto> = serde_json::from_value(data).map_err(decode_error)?;
    Ok(dtos.into_iter().map(RecordDto::into_record).collect())
}

/// Decode the category collection
pub(crate) fn decode_categories(data: Value) -> Result<Vec<CategoryRef>, FetchError> {
    if data.is_null() {
        return Ok(Vec::new());
    }
    let dtos: Vec<CategoryDto> = serde_json::from_value(data).map_err(decode_error)?;
    Ok(dtos.into_iter().map(CategoryDto::into_category).collect())
}
