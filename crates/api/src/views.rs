//! Plain HTML views.
//!
//! Pages are assembled with `format!`; every piece of user text goes through
//! [`escape`] first.

use db::Record;

/// Whether the record form creates or edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

/// Escape the five HTML-significant characters.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body>\n\
         <nav><a href=\"/\">Records</a> | <a href=\"/add\">Add</a> | <a href=\"/about\">About</a></nav>\n\
         {body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

/// List of records with a total and a search box.
pub fn records_page(records: &[Record], search_query: Option<&str>) -> String {
    let query = search_query.unwrap_or("");
    let mut body = format!(
        "<h1>Records</h1>\n<form action=\"/search\" method=\"get\">\
         <input name=\"q\" value=\"{}\"><button type=\"submit\">Search</button></form>\n",
        escape(query)
    );
    if !query.trim().is_empty() {
        body.push_str(&format!("<p>Results for &quot;{}&quot;</p>\n", escape(query)));
    }
    body.push_str(&format!("<p>Total: {}</p>\n", records.len()));

    body.push_str(
        "<table>\n<tr><th>ID</th><th>Name</th><th>Value</th><th>Category</th><th>Description</th><th></th></tr>\n",
    );
    for record in records {
        let id = record.id.unwrap_or_default();
        body.push_str(&format!(
            "<tr><td>{id}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><a href=\"/edit/{id}\">Edit</a> <a href=\"/delete/{id}\">Delete</a></td></tr>\n",
            escape(&record.name),
            record.value,
            escape(&record.category),
            escape(record.description_or_empty()),
        ));
    }
    body.push_str("</table>");

    layout("Records", &body)
}

/// Add/edit form, pre-filled from `record` when editing.
pub fn record_form(mode: FormMode, record: Option<&Record>) -> String {
    let (title, action) = match (mode, record.and_then(|r| r.id)) {
        (FormMode::Edit, Some(id)) => ("Edit record".to_string(), format!("/edit/{id}")),
        _ => ("Add record".to_string(), "/add".to_string()),
    };

    let name = record.map(|r| escape(&r.name)).unwrap_or_default();
    let value = record.map(|r| r.value.to_string()).unwrap_or_default();
    let category = record.map(|r| escape(&r.category)).unwrap_or_default();
    let description = record.map(|r| escape(r.description_or_empty())).unwrap_or_default();

    let body = format!(
        "<h1>{title}</h1>\n<form action=\"{action}\" method=\"post\">\n\
         <label>Name <input name=\"name\" value=\"{name}\" required></label>\n\
         <label>Value <input name=\"value\" value=\"{value}\" required></label>\n\
         <label>Category <input name=\"category\" value=\"{category}\" required></label>\n\
         <label>Description <textarea name=\"description\">{description}</textarea></label>\n\
         <button type=\"submit\">Save</button>\n</form>"
    );

    layout(&title, &body)
}

pub fn about_page() -> String {
    layout(
        "About",
        &format!(
            "<h1>About</h1>\n<p>Record catalog {}: create, edit, delete and search records \
             stored in a local SQLite database.</p>",
            env!("CARGO_PKG_VERSION")
        ),
    )
}
