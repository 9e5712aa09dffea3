//! Server-rendered HTML pages
//!
//! Every value coming from the database goes through [`escape`] before it is
//! interpolated into markup.

use axum::http::StatusCode;

use crate::db::repos::{Post, User};

/// Path of a user's detail page.
pub fn user_url(user_id: i32) -> String {
    format!("/users/{}", user_id)
}

/// Path of a post's detail page.
pub fn post_url(user_id: i32, post_id: i32) -> String {
    format!("/users/{}/posts/{}/details", user_id, post_id)
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title} - Blogly</title>
</head>
<body>
  <nav><a href="/users">Blogly</a></nav>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

fn user_items(users: &[User]) -> String {
    users
        .iter()
        .map(|u| {
            format!(
                "      <li><a href=\"{}\">{}</a></li>\n",
                user_url(u.id),
                escape(&u.full_name())
            )
        })
        .collect()
}

fn user_fields(first_name: &str, last_name: &str, profile_pic: &str) -> String {
    format!(
        r#"      <label>First Name <input name="first-name" maxlength="25" value="{}" required></label>
      <label>Last Name <input name="last-name" maxlength="25" value="{}" required></label>
      <label>Image URL <input name="image-link" value="{}" required></label>
"#,
        escape(first_name),
        escape(last_name),
        escape(profile_pic),
    )
}

fn post_fields(title: &str, content: &str) -> String {
    format!(
        r#"      <label>Title <input name="title" value="{}" required></label>
      <label>Post Content <textarea name="post_content" required>{}</textarea></label>
"#,
        escape(title),
        escape(content),
    )
}

/// GET /users
pub fn user_list(users: &[User]) -> String {
    let body = format!(
        r#"    <h1>Users</h1>
    <ul>
{}    </ul>
    <a href="/users/new">Add user</a>
"#,
        user_items(users)
    );
    layout("Users", &body)
}

/// GET /users/new
pub fn new_user_form(users: &[User]) -> String {
    let body = format!(
        r#"    <h1>Create a user</h1>
    <form method="POST" action="/users/new">
{}      <a href="/users">Cancel</a>
      <button type="submit">Add</button>
    </form>
    <h2>Current users</h2>
    <ul>
{}    </ul>
"#,
        user_fields("", "", ""),
        user_items(users)
    );
    layout("New user", &body)
}

/// GET /users/{id}
pub fn user_detail(user: &User, posts: &[Post]) -> String {
    let post_items: String = posts
        .iter()
        .map(|p| {
            format!(
                "      <li><a href=\"{}\">{}</a></li>\n",
                post_url(user.id, p.id),
                escape(&p.title)
            )
        })
        .collect();

    let base = user_url(user.id);
    let body = format!(
        r#"    <img src="{pic}" alt="{name}">
    <h1>{name}</h1>
    <a href="{base}/edit">Edit</a>
    <form method="POST" action="{base}/delete">
      <button type="submit">Delete</button>
    </form>
    <h2>Posts</h2>
    <ul>
{post_items}    </ul>
    <a href="{base}/posts/new">Add post</a>
"#,
        pic = escape(&user.profile_pic),
        name = escape(&user.full_name()),
        base = base,
        post_items = post_items,
    );
    layout(&user.full_name(), &body)
}

/// GET /users/{id}/edit
pub fn edit_user_form(user: &User) -> String {
    let base = user_url(user.id);
    let body = format!(
        r#"    <h1>Edit a user</h1>
    <form method="POST" action="{base}/edit">
{fields}      <a href="{base}">Cancel</a>
      <button type="submit">Save</button>
    </form>
"#,
        base = base,
        fields = user_fields(&user.first_name, &user.last_name, &user.profile_pic),
    );
    layout("Edit user", &body)
}

/// GET /users/{id}/posts/new
pub fn new_post_form(user: &User) -> String {
    let base = user_url(user.id);
    let body = format!(
        r#"    <h1>Add post for {name}</h1>
    <form method="POST" action="{base}/posts/new">
{fields}      <a href="{base}">Cancel</a>
      <button type="submit">Add</button>
    </form>
"#,
        name = escape(&user.full_name()),
        base = base,
        fields = post_fields("", ""),
    );
    layout("New post", &body)
}

/// GET /users/{id}/posts/{post_id}/details
pub fn post_detail(user: &User, post: &Post) -> String {
    let base = post_url(user.id, post.id);
    let actions = base.trim_end_matches("/details");
    let body = format!(
        r#"    <h1>{title}</h1>
    <p style="white-space: pre-wrap">{content}</p>
    <p><i>By <a href="{user_link}">{name}</a> on {created}</i></p>
    <a href="{user_link}">Cancel</a>
    <a href="{actions}/edit">Edit</a>
    <form method="POST" action="{actions}/delete">
      <button type="submit">Delete</button>
    </form>
"#,
        title = escape(&post.title),
        content = escape(&post.content),
        user_link = user_url(user.id),
        name = escape(&user.full_name()),
        created = post.created_at.format("%a %b %-d %Y, %-I:%M %p"),
        actions = actions,
    );
    layout(&post.title, &body)
}

/// GET /users/{id}/posts/{post_id}/edit
pub fn edit_post_form(user: &User, post: &Post) -> String {
    let details = post_url(user.id, post.id);
    let actions = details.trim_end_matches("/details");
    let body = format!(
        r#"    <h1>Edit post</h1>
    <form method="POST" action="{actions}/edit">
{fields}      <a href="{details}">Cancel</a>
      <button type="submit">Save</button>
    </form>
"#,
        actions = actions,
        fields = post_fields(&post.title, &post.content),
        details = details,
    );
    layout("Edit post", &body)
}

/// Error page for any failed request.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let heading = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );
    let body = format!(
        "    <h1>{}</h1>\n    <p>{}</p>\n",
        escape(&heading),
        escape(message)
    );
    layout(&heading, &body)
}
