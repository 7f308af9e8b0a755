//! Tests for the recipe API client against a minimal in-process HTTP
//! server: response shape, failure-drop policy, ordering and concurrency.

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use grocery::client::RecipeApiClient;
    use grocery::recipe_model::IngredientText;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    /// Serve `/api/recipes/{id}` with a canned recipe (404 for the id
    /// "missing"), waiting `delay` before each response
    async fn spawn_recipe_server(delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let (socket, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                tokio::spawn(handle_connection(socket, delay));
            }
        });

        format!("http://{}", addr)
    }

    async fn handle_connection(mut socket: TcpStream, delay: Duration) {
        let mut buf = vec![0u8; 4096];
        let mut read = 0;
        loop {
            match socket.read(&mut buf[read..]).await {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    read += n;
                    if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                    if read == buf.len() {
                        break;
                    }
                }
            }
        }

        let request = String::from_utf8_lossy(&buf[..read]).to_string();
        let path = request
            .lines()
            .next()
            .and_then(|line| line.split_whitespace().nth(1))
            .unwrap_or("/")
            .to_string();

        tokio::time::sleep(delay).await;

        let response = match path.strip_prefix("/api/recipes/") {
            Some("missing") => {
                "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                    .to_string()
            }
            Some(id) => {
                let body = format!(
                    r#"{{"id":"{}","title":"Recipe {}","ingredients":["1 cup flour"]}}"#,
                    id, id
                );
                format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                )
            }
            None => {
                "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                    .to_string()
            }
        };

        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    }

    #[tokio::test]
    async fn test_get_recipe_deserializes_record() {
        let base = spawn_recipe_server(Duration::ZERO).await;
        let client = RecipeApiClient::new(&base).unwrap();

        let recipe = client.get_recipe("7").await.unwrap();
        assert_eq!(recipe.id, "7");
        assert_eq!(recipe.title, "Recipe 7");
        assert_eq!(
            recipe.ingredients,
            IngredientText::Lines(vec!["1 cup flour".to_string()])
        );
    }

    #[tokio::test]
    async fn test_get_recipes_preserves_order_and_drops_failures() {
        let base = spawn_recipe_server(Duration::ZERO).await;
        let client = RecipeApiClient::new(&base).unwrap();

        let ids = vec![
            "b".to_string(),
            "missing".to_string(),
            "a".to_string(),
        ];
        let recipes = client.get_recipes(&ids).await;

        let got: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(got, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_get_recipes_fetches_concurrently() {
        let base = spawn_recipe_server(Duration::from_millis(250)).await;
        let client = RecipeApiClient::new(&base).unwrap();

        let ids: Vec<String> = (0..4).map(|i| format!("r{}", i)).collect();
        let started = Instant::now();
        let recipes = client.get_recipes(&ids).await;
        let elapsed = started.elapsed();

        assert_eq!(recipes.len(), 4);
        // Four sequential round-trips would take at least a second; the
        // concurrent fetch finishes in roughly one delay.
        assert!(
            elapsed < Duration::from_millis(900),
            "fetches took {:?}, expected them to overlap",
            elapsed
        );
    }
}
