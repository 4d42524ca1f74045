// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Sample workflow: traced user, post and comment fetches.
//!
//! Run with `cargo run --example workflow --features subscriber`.

use std::time::Duration;

use calltree::{Action, Fault, Tracer};
use futures::future::join_all;
use serde_json::json;
use tokio::time::sleep;

#[derive(Debug, Clone)]
struct User {
    id: u64,
    name: String,
}

#[derive(Debug, Clone)]
struct Post {
    id: u64,
    title: String,
}

async fn fetch_user(user_id: u64) -> anyhow::Result<User> {
    sleep(Duration::from_millis(100)).await;
    if user_id == 999 {
        return Err(Fault::new("User not found")
            .with_cause(json!({ "userId": user_id }))
            .into());
    }
    Ok(User {
        id: user_id,
        name: format!("User {user_id}"),
    })
}

async fn fetch_posts(user_id: u64) -> anyhow::Result<Vec<Post>> {
    sleep(Duration::from_millis(150)).await;
    Ok(vec![Post {
        id: 1,
        title: format!("First Post by {user_id}"),
    }])
}

async fn fetch_comments(post_id: u64) -> anyhow::Result<Vec<String>> {
    sleep(Duration::from_millis(80)).await;
    Ok(vec![format!("Great post! ({post_id})")])
}

#[tokio::main]
async fn main() {
    calltree::logging::init();

    let tracer = Tracer::new();
    let roots = tracer.clone();

    let _ = tracer
        .measure("Comprehensive Workflow Example", |m| async move {
            roots.annotate("noop measure string");
            roots.annotate(Action::new("noop measure object").field("values", json!([1, 2])));

            let Some(user) = m
                .run(Action::new("Fetch User").field("userId", 1), |_| fetch_user(1))
                .await
                .ok()
            else {
                return anyhow::Ok(());
            };
            tracing::debug!(name = %user.name, "fetched first user");

            let _ = m
                .run(Action::new("Fetch Invalid User").field("userId", 999), |_| {
                    fetch_user(999)
                })
                .await;

            let _ = m
                .run("Fetch Multiple Users in Parallel", |m2| async move {
                    let fetches = [2, 3, 4].map(|id| {
                        m2.run(Action::new("Fetch User").field("userId", id), move |_| {
                            fetch_user(id)
                        })
                    });
                    anyhow::Ok(join_all(fetches).await)
                })
                .await;

            let user_id = user.id;
            let _ = m
                .run("Enrich Posts with Comments", |m2| async move {
                    let Some(posts) = m2
                        .run(Action::new("Fetch Posts").field("userId", user_id), move |_| {
                            fetch_posts(user_id)
                        })
                        .await
                        .ok()
                    else {
                        return anyhow::Ok(());
                    };

                    for post in posts {
                        tracing::debug!(title = %post.title, "enriching post");
                        let _ = m2
                            .run(Action::new("Fetch Comments").field("postId", post.id), move |_| {
                                fetch_comments(post.id)
                            })
                            .await;
                    }
                    anyhow::Ok(())
                })
                .await;

            anyhow::Ok(())
        })
        .await;

    println!("\n✅ Workflow complete.");
}
