//! # Mock Framework
//!
//! Utilities for testing clients and services in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_list`] or [`expect_action`] to assert behavior.

use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};

/// Creates a mock client and a receiver for asserting requests.
///
/// Instead of spinning up a real `ResourceActor`, the test holds the receiving end
/// of the channel, inspects every request and answers it by hand. Success, failure
/// and ordering all become deterministic.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, oneshot::Sender<Result<T::ActionResult, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{MenuClient, TableClient};
    use crate::domain::{DiningTable, MenuItem, MenuItemCreate};
    use crate::table_actor::{TableAction, TableActionResult, TableError};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<MenuItem>(10);
        let client = MenuClient::new(inner);

        let create_task = tokio::spawn(async move {
            let item = MenuItemCreate {
                name: "Doro Wot".to_string(),
                description: "Chicken stew".to_string(),
                price: Decimal::new(1799, 2),
                image: "https://img/doro.jpg".to_string(),
                category: "Main Courses".to_string(),
            };
            client.add_menu_item(item).await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Doro Wot");
        let stored = MenuItem {
            id: "menu-1".to_string(),
            name: params.name,
            description: params.description,
            price: params.price,
            image: params.image,
            category: params.category,
        };
        responder.send(Ok(stored.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(stored));
    }

    #[tokio::test]
    async fn test_table_client_maps_missing_table() {
        let (inner, mut receiver) = create_mock_client::<DiningTable>(10);
        let client = TableClient::new(inner);

        let task = tokio::spawn(async move { client.update_table_availability("t9".into(), true).await });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, "t9");
        assert!(matches!(action, TableAction::SetAvailability(true)));
        responder.send(Err(FrameworkError::NotFound(id))).unwrap();

        assert_eq!(task.await.unwrap().unwrap_err(), TableError::NotFound("t9".into()));
    }

    #[tokio::test]
    async fn test_table_client_returns_updated_table() {
        let (inner, mut receiver) = create_mock_client::<DiningTable>(10);
        let client = TableClient::new(inner);

        let task = tokio::spawn(async move { client.update_table_availability("t6".into(), true).await });

        let (id, _action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        let table = DiningTable::new(id, 6, 2, true);
        responder.send(Ok(TableActionResult::SetAvailability(table.clone()))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(table));
    }

    #[tokio::test]
    async fn test_table_client_lookup_by_id() {
        let (inner, mut receiver) = create_mock_client::<DiningTable>(10);
        let client = TableClient::new(inner);

        let task = tokio::spawn({
            let client = client.clone();
            async move { client.get_table("t2".into()).await }
        });
        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, "t2");
        let table = DiningTable::new(id, 2, 4, true);
        responder.send(Ok(Some(table.clone()))).unwrap();
        assert_eq!(task.await.unwrap(), Ok(Some(table)));

        // Unknown id is an empty answer, not an error
        let task = tokio::spawn(async move { client.get_table("t404".into()).await });
        let (_id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        responder.send(Ok(None)).unwrap();
        assert_eq!(task.await.unwrap(), Ok(None));
    }
}
