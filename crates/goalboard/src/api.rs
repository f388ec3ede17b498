//! Mock todo/goal API
//!
//! In-memory backend with simulated latency and random write failures,
//! so optimistic updates and their rollbacks can be exercised without a
//! server. Reads never fail.

use crate::domain_models::{Goal, Todo};
use goalboard_config::AppConfig;
use rand::{distributions::Alphanumeric, Rng};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;

const ID_LENGTH: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("mock API failed to {0}")]
    Simulated(&'static str),
    #[error("no {kind} with id {id}")]
    NotFound { kind: &'static str, id: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Default)]
struct Db {
    todos: Vec<Todo>,
    goals: Vec<Goal>,
}

impl Db {
    fn sample() -> Self {
        Self {
            todos: vec![
                Todo::new(generate_id(), "Walk the dog"),
                Todo::new(generate_id(), "Wash the car"),
                Todo {
                    complete: true,
                    ..Todo::new(generate_id(), "Do laundry")
                },
            ],
            goals: vec![
                Goal::new(generate_id(), "Learn Redux"),
                Goal::new(generate_id(), "Read 50 books this year"),
            ],
        }
    }
}

/// Handle to the mock API, cheap to clone into tasks
#[derive(Debug, Clone)]
pub struct Api {
    db: Arc<Mutex<Db>>,
    latency: Duration,
    fetch_latency: Duration,
    failure_rate: f64,
}

impl Api {
    /// Empty API with the given write latency and failure rate
    pub fn new(latency: Duration, fetch_latency: Duration, failure_rate: f64) -> Self {
        Self {
            db: Arc::new(Mutex::new(Db::default())),
            latency,
            fetch_latency,
            failure_rate,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let mut api = Self::new(
            Duration::from_millis(config.api_latency_ms),
            Duration::from_millis(config.fetch_latency_ms),
            config.api_failure_rate,
        );
        if config.seed_sample_data {
            api.db = Arc::new(Mutex::new(Db::sample()));
        }
        api
    }

    pub async fn fetch_todos(&self) -> ApiResult<Vec<Todo>> {
        tokio::time::sleep(self.fetch_latency).await;
        Ok(self.db.lock().await.todos.clone())
    }

    pub async fn fetch_goals(&self) -> ApiResult<Vec<Goal>> {
        tokio::time::sleep(self.fetch_latency).await;
        Ok(self.db.lock().await.goals.clone())
    }

    pub async fn save_todo(&self, name: &str) -> ApiResult<Todo> {
        self.simulate_write("save todo").await?;
        let todo = Todo::new(generate_id(), name);
        self.db.lock().await.todos.push(todo.clone());
        Ok(todo)
    }

    pub async fn save_goal(&self, name: &str) -> ApiResult<Goal> {
        self.simulate_write("save goal").await?;
        let goal = Goal::new(generate_id(), name);
        self.db.lock().await.goals.push(goal.clone());
        Ok(goal)
    }

    pub async fn delete_todo(&self, id: &str) -> ApiResult<()> {
        self.simulate_write("delete todo").await?;
        let mut db = self.db.lock().await;
        let index = db
            .todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or_else(|| not_found("todo", id))?;
        db.todos.remove(index);
        Ok(())
    }

    pub async fn delete_goal(&self, id: &str) -> ApiResult<()> {
        self.simulate_write("delete goal").await?;
        let mut db = self.db.lock().await;
        let index = db
            .goals
            .iter()
            .position(|goal| goal.id == id)
            .ok_or_else(|| not_found("goal", id))?;
        db.goals.remove(index);
        Ok(())
    }

    /// Flip `complete` on the stored todo and return the updated todo
    pub async fn save_todo_toggle(&self, id: &str) -> ApiResult<Todo> {
        self.simulate_write("toggle todo").await?;
        let mut db = self.db.lock().await;
        let todo = db
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(|| not_found("todo", id))?;
        todo.complete = !todo.complete;
        Ok(todo.clone())
    }

    async fn simulate_write(&self, operation: &'static str) -> ApiResult<()> {
        tokio::time::sleep(self.latency).await;
        if self.should_fail() {
            log::warn!("Api: simulated failure on {}", operation);
            return Err(ApiError::Simulated(operation));
        }
        Ok(())
    }

    fn should_fail(&self) -> bool {
        // NaN compares false and never fails
        self.failure_rate > 0.0 && rand::thread_rng().gen_bool(self.failure_rate.min(1.0))
    }
}

fn not_found(kind: &'static str, id: &str) -> ApiError {
    ApiError::NotFound {
        kind,
        id: id.to_string(),
    }
}

fn generate_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reliable() -> Api {
        Api::new(Duration::ZERO, Duration::ZERO, 0.0)
    }

    fn broken() -> Api {
        Api::new(Duration::ZERO, Duration::ZERO, 1.0)
    }

    #[tokio::test]
    async fn test_save_and_fetch() {
        let api = reliable();

        let todo = api.save_todo("Learn Rust").await.unwrap();
        let goal = api.save_goal("Ship it").await.unwrap();

        assert_eq!(todo.id.len(), ID_LENGTH);
        assert!(!todo.complete);
        assert_eq!(api.fetch_todos().await.unwrap(), vec![todo]);
        assert_eq!(api.fetch_goals().await.unwrap(), vec![goal]);
    }

    #[tokio::test]
    async fn test_toggle_and_delete() {
        let api = reliable();
        let todo = api.save_todo("Walk").await.unwrap();

        let toggled = api.save_todo_toggle(&todo.id).await.unwrap();
        assert!(toggled.complete);

        api.delete_todo(&todo.id).await.unwrap();
        assert!(api.fetch_todos().await.unwrap().is_empty());
        assert_eq!(
            api.delete_todo(&todo.id).await,
            Err(ApiError::NotFound {
                kind: "todo",
                id: todo.id.clone()
            })
        );
    }

    #[tokio::test]
    async fn test_failed_write_changes_nothing() {
        let api = broken();

        assert_eq!(
            api.save_goal("Run a marathon").await,
            Err(ApiError::Simulated("save goal"))
        );
        assert!(api.fetch_goals().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sample_data_from_config() {
        let config = AppConfig {
            api_latency_ms: 0,
            fetch_latency_ms: 0,
            ..AppConfig::default()
        };
        let api = Api::from_config(&config);

        let todos = api.fetch_todos().await.unwrap();
        assert_eq!(todos.len(), 3);
        assert!(todos.iter().any(|todo| todo.complete));
        assert_eq!(api.fetch_goals().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_from_config_without_sample_data() {
        let config = AppConfig {
            api_latency_ms: 0,
            fetch_latency_ms: 0,
            api_failure_rate: 0.0,
            seed_sample_data: false,
            ..AppConfig::default()
        };
        let api = Api::from_config(&config);

        assert!(api.fetch_todos().await.unwrap().is_empty());
        assert!(api.save_goal("Ship it").await.is_ok());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(generate_id(), generate_id());
    }
}
