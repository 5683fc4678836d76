//! The services catalog: what is on offer, how it is priced, and whether it
//! is currently listed.

use crate::error::{FolioError, FolioResult};
use crate::models::{
    CreateService, Feature, Patch, Pricing, Service, ServiceFilter, UpdateService,
};
use crate::services::query::{FilterValue, ListQuery, SortOrder};
use crate::services::slug::slug_for_title;
use crate::services::validation::Validate;
use crate::services::{new_id, slug_taken, slug_write_error, timestamp, to_json};
use crate::Database;
use rusqlite::{params_from_iter, Connection, OptionalExtension};

const TABLE: &str = "services";
const DUPLICATE_MSG: &str = "A service with this title already exists";
const NOT_FOUND_MSG: &str = "Service not found";
const SERVICE_COLUMNS: &str = "id, title, slug, description, short_description, features, pricing, starting_price, image, category, active, created_at, updated_at";

pub fn create_service(db: &Database, input: CreateService) -> FolioResult<Service> {
    let input = input.validate()?;
    let slug = slug_for_title(&input.title)?;

    let conn = db.get()?;
    if slug_taken(&conn, TABLE, &slug, None)? {
        return Err(FolioError::duplicate_slug(DUPLICATE_MSG));
    }

    let now = timestamp();
    let service = Service {
        id: new_id(),
        title: input.title,
        slug,
        description: input.description,
        short_description: input.short_description,
        features: input.features,
        pricing: input.pricing,
        starting_price: input.starting_price,
        image: input.image,
        category: input.category,
        active: input.active,
        created_at: now.clone(),
        updated_at: now,
    };

    conn.execute(
        r#"
        INSERT INTO services (id, title, slug, description, short_description, features, pricing, starting_price, image, category, active, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        rusqlite::params![
            &service.id,
            &service.title,
            &service.slug,
            &service.description,
            &service.short_description,
            to_json(&service.features)?,
            service.pricing.as_str(),
            service.starting_price,
            &service.image,
            service.category.as_str(),
            service.active,
            &service.created_at,
            &service.updated_at,
        ],
    )
    .map_err(|e| slug_write_error(e, DUPLICATE_MSG))?;

    tracing::info!(id = %service.id, slug = %service.slug, "Created service");
    Ok(service)
}

pub fn get_service(db: &Database, id: &str) -> FolioResult<Service> {
    let conn = db.get()?;
    find_service(&conn, id)?.ok_or_else(|| FolioError::not_found(NOT_FOUND_MSG))
}

/// The whole catalog in insertion order. Not paginated.
pub fn list_services(db: &Database, filter: ServiceFilter) -> FolioResult<Vec<Service>> {
    let query = ListQuery::new(TABLE, SortOrder::OldestFirst)
        .filter_opt(
            "category",
            filter.category.map(|c| FilterValue::Text(c.as_str().to_string())),
        )
        .filter_opt("active", filter.active.map(FilterValue::Bool));

    let conn = db.get()?;
    let mut stmt = conn.prepare(&query.select_sql(SERVICE_COLUMNS))?;
    let services = stmt
        .query_map(params_from_iter(query.select_params()), row_to_service)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(services)
}

pub fn update_service(db: &Database, id: &str, patch: UpdateService) -> FolioResult<Service> {
    let changes = patch.validate()?;

    let conn = db.get()?;
    let mut service = find_service(&conn, id)?.ok_or_else(|| FolioError::not_found(NOT_FOUND_MSG))?;

    let title_changed = changes.title.as_set().is_some_and(|t| *t != service.title);
    changes.title.apply_to(&mut service.title, String::new);
    changes.description.apply_to(&mut service.description, String::new);
    changes
        .short_description
        .apply_to(&mut service.short_description, String::new);
    changes.features.apply_to(&mut service.features, Vec::new);
    changes.pricing.apply_to(&mut service.pricing, Pricing::default);
    changes.starting_price.apply_to(&mut service.starting_price, || 0.0);
    changes.image.apply_to(&mut service.image, String::new);
    if let Patch::Set(category) = changes.category {
        service.category = category;
    }
    changes.active.apply_to(&mut service.active, || true);

    if title_changed {
        let slug = slug_for_title(&service.title)?;
        if slug_taken(&conn, TABLE, &slug, Some(&service.id))? {
            return Err(FolioError::duplicate_slug(DUPLICATE_MSG));
        }
        service.slug = slug;
    }
    service.updated_at = timestamp();

    conn.execute(
        r#"
        UPDATE services SET title = ?, slug = ?, description = ?, short_description = ?, features = ?, pricing = ?, starting_price = ?, image = ?, category = ?, active = ?, updated_at = ?
        WHERE id = ?
        "#,
        rusqlite::params![
            &service.title,
            &service.slug,
            &service.description,
            &service.short_description,
            to_json(&service.features)?,
            service.pricing.as_str(),
            service.starting_price,
            &service.image,
            service.category.as_str(),
            service.active,
            &service.updated_at,
            &service.id,
        ],
    )
    .map_err(|e| slug_write_error(e, DUPLICATE_MSG))?;

    tracing::info!(id = %service.id, slug = %service.slug, "Updated service");
    Ok(service)
}

pub fn delete_service(db: &Database, id: &str) -> FolioResult<()> {
    let conn = db.get()?;
    let removed = conn.execute("DELETE FROM services WHERE id = ?", [id])?;
    if removed == 0 {
        return Err(FolioError::not_found(NOT_FOUND_MSG));
    }
    tracing::info!(id = %id, "Deleted service");
    Ok(())
}

fn find_service(conn: &Connection, id: &str) -> FolioResult<Option<Service>> {
    let sql = format!("SELECT {} FROM services WHERE id = ?", SERVICE_COLUMNS);
    let service = conn.query_row(&sql, [id], row_to_service).optional()?;
    Ok(service)
}

fn row_to_service(row: &rusqlite::Row) -> rusqlite::Result<Service> {
    let features: Vec<Feature> =
        serde_json::from_str(&row.get::<_, String>(5)?).unwrap_or_default();
    let category: String = row.get(9)?;

    Ok(Service {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        description: row.get(3)?,
        short_description: row.get(4)?,
        features,
        pricing: row.get::<_, String>(6)?.parse().unwrap_or_default(),
        starting_price: row.get(7)?,
        image: row.get(8)?,
        category: category.parse().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                9,
                rusqlite::types::Type::Text,
                format!("unknown service category '{}'", category).into(),
            )
        })?,
        active: row.get(10)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}
