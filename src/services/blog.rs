use crate::error::{FolioError, FolioResult};
use crate::models::{Blog, BlogFilter, BlogSummary, CreateBlog, Pagination, UpdateBlog};
use crate::services::query::{FilterValue, ListQuery, PageRequest, SortOrder};
use crate::services::read_time::estimate_read_time;
use crate::services::slug::slug_for_title;
use crate::services::validation::Validate;
use crate::services::{new_id, slug_taken, slug_write_error, timestamp, to_json};
use crate::Database;
use rusqlite::{params_from_iter, Connection, OptionalExtension};

const TABLE: &str = "blogs";
const DUPLICATE_MSG: &str = "A blog with this title already exists";
const NOT_FOUND_MSG: &str = "Blog not found";

const BLOG_COLUMNS: &str = "id, title, slug, excerpt, content, featured_image, tags, author, published, read_time, created_at, updated_at";
const SUMMARY_COLUMNS: &str = "id, title, slug, excerpt, featured_image, tags, author, published, read_time, created_at, updated_at";

pub fn create_blog(db: &Database, input: CreateBlog, author: &str) -> FolioResult<Blog> {
    let input = input.validate()?;

    let slug = slug_for_title(&input.title)?;
    let read_time = estimate_read_time(&input.content);

    let conn = db.get()?;
    if slug_taken(&conn, TABLE, &slug, None)? {
        return Err(FolioError::duplicate_slug(DUPLICATE_MSG));
    }

    let now = timestamp();
    let blog = Blog {
        id: new_id(),
        title: input.title,
        slug,
        excerpt: input.excerpt,
        content: input.content,
        featured_image: input.featured_image,
        tags: input.tags,
        author: author.to_string(),
        published: input.published,
        read_time,
        created_at: now.clone(),
        updated_at: now,
    };

    conn.execute(
        r#"
        INSERT INTO blogs (id, title, slug, excerpt, content, featured_image, tags, author, published, read_time, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
        rusqlite::params![
            &blog.id,
            &blog.title,
            &blog.slug,
            &blog.excerpt,
            &blog.content,
            &blog.featured_image,
            to_json(&blog.tags)?,
            &blog.author,
            blog.published,
            blog.read_time,
            &blog.created_at,
            &blog.updated_at,
        ],
    )
    .map_err(|e| slug_write_error(e, DUPLICATE_MSG))?;

    tracing::info!(id = %blog.id, slug = %blog.slug, "Created blog");
    Ok(blog)
}

/// Fetches a post by id or slug. An id match wins over a slug match.
pub fn get_blog(db: &Database, id_or_slug: &str) -> FolioResult<Blog> {
    let conn = db.get()?;
    find_blog(&conn, id_or_slug)?.ok_or_else(|| FolioError::not_found(NOT_FOUND_MSG))
}

pub fn list_blogs(
    db: &Database,
    filter: BlogFilter,
    page: PageRequest,
) -> FolioResult<(Vec<BlogSummary>, Pagination)> {
    let query = ListQuery::new(TABLE, SortOrder::NewestFirst)
        .filter_opt("published", filter.published.map(FilterValue::Bool))
        .paginate(page);

    let conn = db.get()?;
    let mut stmt = conn.prepare(&query.select_sql(SUMMARY_COLUMNS))?;
    let blogs = stmt
        .query_map(params_from_iter(query.select_params()), row_to_summary)?
        .collect::<Result<Vec<_>, _>>()?;

    let total: i64 = conn.query_row(
        &query.count_sql(),
        params_from_iter(query.filter_params()),
        |row| row.get(0),
    )?;

    Ok((blogs, page.pagination(total.max(0) as u64)))
}

pub fn update_blog(db: &Database, id_or_slug: &str, patch: UpdateBlog) -> FolioResult<Blog> {
    let patch = patch.validate()?;

    let conn = db.get()?;
    let mut blog =
        find_blog(&conn, id_or_slug)?.ok_or_else(|| FolioError::not_found(NOT_FOUND_MSG))?;

    let title_changed = patch.title.as_set().is_some_and(|t| *t != blog.title);
    patch.title.apply_to(&mut blog.title, String::new);
    patch.excerpt.apply_to(&mut blog.excerpt, String::new);
    let content_written = patch.content.apply_to(&mut blog.content, String::new);
    patch.featured_image.apply_to(&mut blog.featured_image, String::new);
    patch.tags.apply_to(&mut blog.tags, Vec::new);
    patch.published.apply_to(&mut blog.published, || false);

    refresh_derived(&conn, &mut blog, title_changed, content_written)?;
    blog.updated_at = timestamp();

    conn.execute(
        r#"
        UPDATE blogs SET title = ?, slug = ?, excerpt = ?, content = ?, featured_image = ?, tags = ?, published = ?, read_time = ?, updated_at = ?
        WHERE id = ?
        "#,
        rusqlite::params![
            &blog.title,
            &blog.slug,
            &blog.excerpt,
            &blog.content,
            &blog.featured_image,
            to_json(&blog.tags)?,
            blog.published,
            blog.read_time,
            &blog.updated_at,
            &blog.id,
        ],
    )
    .map_err(|e| slug_write_error(e, DUPLICATE_MSG))?;

    tracing::info!(id = %blog.id, slug = %blog.slug, "Updated blog");
    Ok(blog)
}

/// Removes the post matching `id_or_slug` in a single statement.
pub fn delete_blog(db: &Database, id_or_slug: &str) -> FolioResult<()> {
    let conn = db.get()?;
    let removed = conn.execute(
        "DELETE FROM blogs WHERE rowid = (SELECT rowid FROM blogs WHERE id = ?1 OR slug = ?1 ORDER BY (id = ?1) DESC LIMIT 1)",
        [id_or_slug],
    )?;

    if removed == 0 {
        return Err(FolioError::not_found(NOT_FOUND_MSG));
    }
    tracing::info!(key = %id_or_slug, "Deleted blog");
    Ok(())
}

/// Recomputes the slug after a title change and the read time after a
/// content write. Runs before every update is persisted.
fn refresh_derived(
    conn: &Connection,
    blog: &mut Blog,
    title_changed: bool,
    content_written: bool,
) -> FolioResult<()> {
    if title_changed {
        let slug = slug_for_title(&blog.title)?;
        if slug_taken(conn, TABLE, &slug, Some(&blog.id))? {
            return Err(FolioError::duplicate_slug(DUPLICATE_MSG));
        }
        blog.slug = slug;
    }
    if content_written {
        blog.read_time = estimate_read_time(&blog.content);
    }
    Ok(())
}

fn find_blog(conn: &Connection, id_or_slug: &str) -> FolioResult<Option<Blog>> {
    let sql = format!(
        "SELECT {} FROM blogs WHERE id = ?1 OR slug = ?1 ORDER BY (id = ?1) DESC LIMIT 1",
        BLOG_COLUMNS
    );
    let blog = conn.query_row(&sql, [id_or_slug], row_to_blog).optional()?;
    Ok(blog)
}

fn parse_tags(raw: String) -> Vec<String> {
    serde_json::from_str(&raw).unwrap_or_default()
}

fn row_to_blog(row: &rusqlite::Row) -> rusqlite::Result<Blog> {
    Ok(Blog {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        excerpt: row.get(3)?,
        content: row.get(4)?,
        featured_image: row.get(5)?,
        tags: parse_tags(row.get(6)?),
        author: row.get(7)?,
        published: row.get(8)?,
        read_time: row.get(9)?,
        created_at: row.get(10)?,
        updated_at: row.get(11)?,
    })
}

fn row_to_summary(row: &rusqlite::Row) -> rusqlite::Result<BlogSummary> {
    Ok(BlogSummary {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        excerpt: row.get(3)?,
        featured_image: row.get(4)?,
        tags: parse_tags(row.get(5)?),
        author: row.get(6)?,
        published: row.get(7)?,
        read_time: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}
