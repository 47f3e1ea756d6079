//! Registry search.

use crate::{Context, Result};
use nex_schema::IndexEntry;

/// Index entries whose id, short name, name, description or keywords
/// contain `query`, case-insensitively, in registry order.
///
/// # Errors
///
/// Returns any error from fetching or parsing the registry index.
pub async fn search(ctx: &Context, query: &str) -> Result<Vec<IndexEntry>> {
    let index = ctx.registry.fetch_index(&ctx.http).await?;
    Ok(index.search(query).into_iter().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::TestEnv;
    use mockito::Server;

    #[tokio::test]
    async fn test_search_matches_keywords_and_description() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/index.json")
            .with_body(
                r#"{"packages":[
                    {"id":"alice.hello","description":"Prints a Greeting"},
                    {"id":"bob.fmt","keywords":["json","format"]},
                    {"id":"carol.misc"}
                ]}"#,
            )
            .create_async()
            .await;
        let env = TestEnv::new(&server.url(), &[]);

        let hits = search(&env.ctx, "greeting").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "alice.hello");

        let hits = search(&env.ctx, "JSON").await.unwrap();
        assert_eq!(hits[0].id, "bob.fmt");

        assert!(search(&env.ctx, "zzz").await.unwrap().is_empty());
    }
}
