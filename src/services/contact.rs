use crate::error::{FolioError, FolioResult};
use crate::models::{
    Budget, Contact, ContactFilter, ContactStatus, CreateContact, Pagination, ServiceInterest,
    UpdateContact,
};
use crate::services::query::{FilterValue, ListQuery, PageRequest, SortOrder};
use crate::services::validation::Validate;
use crate::services::{new_id, timestamp};
use crate::Database;
use rusqlite::{params_from_iter, Connection, OptionalExtension};

const TABLE: &str = "contacts";
const NOT_FOUND_MSG: &str = "Contact not found";
const CONTACT_COLUMNS: &str =
    "id, name, email, subject, message, service, budget, status, created_at, updated_at";

/// Stores a contact form submission. The status always starts at `new`.
pub fn create_contact(db: &Database, input: CreateContact) -> FolioResult<Contact> {
    let input = input.validate()?;

    let now = timestamp();
    let contact = Contact {
        id: new_id(),
        name: input.name,
        email: input.email,
        subject: input.subject,
        message: input.message,
        service: input.service,
        budget: input.budget,
        status: ContactStatus::New,
        created_at: now.clone(),
        updated_at: now,
    };

    let conn = db.get()?;
    conn.execute(
        r#"
        INSERT INTO contacts (id, name, email, subject, message, service, budget, status, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        rusqlite::params![
            &contact.id,
            &contact.name,
            &contact.email,
            &contact.subject,
            &contact.message,
            contact.service.as_str(),
            contact.budget.as_str(),
            contact.status.as_str(),
            &contact.created_at,
            &contact.updated_at,
        ],
    )?;

    tracing::info!(id = %contact.id, service = %contact.service, "New contact submission");
    Ok(contact)
}

pub fn get_contact(db: &Database, id: &str) -> FolioResult<Contact> {
    let conn = db.get()?;
    find_contact(&conn, id)?.ok_or_else(|| FolioError::not_found(NOT_FOUND_MSG))
}

pub fn list_contacts(
    db: &Database,
    filter: ContactFilter,
    page: PageRequest,
) -> FolioResult<(Vec<Contact>, Pagination)> {
    let query = ListQuery::new(TABLE, SortOrder::NewestFirst)
        .filter_opt(
            "status",
            filter.status.map(|s| FilterValue::Text(s.as_str().to_string())),
        )
        .paginate(page);

    let conn = db.get()?;
    let mut stmt = conn.prepare(&query.select_sql(CONTACT_COLUMNS))?;
    let contacts = stmt
        .query_map(params_from_iter(query.select_params()), row_to_contact)?
        .collect::<Result<Vec<_>, _>>()?;

    let total: i64 = conn.query_row(
        &query.count_sql(),
        params_from_iter(query.filter_params()),
        |row| row.get(0),
    )?;

    Ok((contacts, page.pagination(total.max(0) as u64)))
}

/// Administrative edit of a submission, including its follow-up status.
pub fn update_contact(db: &Database, id: &str, patch: UpdateContact) -> FolioResult<Contact> {
    let changes = patch.validate()?;

    let conn = db.get()?;
    let mut contact = find_contact(&conn, id)?.ok_or_else(|| FolioError::not_found(NOT_FOUND_MSG))?;

    changes.name.apply_to(&mut contact.name, String::new);
    changes.email.apply_to(&mut contact.email, String::new);
    changes.subject.apply_to(&mut contact.subject, String::new);
    changes.message.apply_to(&mut contact.message, String::new);
    changes.service.apply_to(&mut contact.service, ServiceInterest::default);
    changes.budget.apply_to(&mut contact.budget, Budget::default);
    let status_changed = changes.status.apply_to(&mut contact.status, ContactStatus::default);
    contact.updated_at = timestamp();

    conn.execute(
        r#"
        UPDATE contacts SET name = ?, email = ?, subject = ?, message = ?, service = ?, budget = ?, status = ?, updated_at = ?
        WHERE id = ?
        "#,
        rusqlite::params![
            &contact.name,
            &contact.email,
            &contact.subject,
            &contact.message,
            contact.service.as_str(),
            contact.budget.as_str(),
            contact.status.as_str(),
            &contact.updated_at,
            &contact.id,
        ],
    )?;

    if status_changed {
        tracing::info!(id = %contact.id, status = %contact.status, "Contact status changed");
    }
    Ok(contact)
}

pub fn delete_contact(db: &Database, id: &str) -> FolioResult<()> {
    let conn = db.get()?;
    let removed = conn.execute("DELETE FROM contacts WHERE id = ?", [id])?;
    if removed == 0 {
        return Err(FolioError::not_found(NOT_FOUND_MSG));
    }
    tracing::info!(id = %id, "Deleted contact");
    Ok(())
}

fn find_contact(conn: &Connection, id: &str) -> FolioResult<Option<Contact>> {
    let sql = format!("SELECT {} FROM contacts WHERE id = ?", CONTACT_COLUMNS);
    let contact = conn.query_row(&sql, [id], row_to_contact).optional()?;
    Ok(contact)
}

fn row_to_contact(row: &rusqlite::Row) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        subject: row.get(3)?,
        message: row.get(4)?,
        service: row.get::<_, String>(5)?.parse().unwrap_or_default(),
        budget: row.get::<_, String>(6)?.parse().unwrap_or_default(),
        status: row.get::<_, String>(7)?.parse().unwrap_or_default(),
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}
