// Both notification channels feeding one center through the bus.

use std::time::Duration;

use crate::modules::notifications::core::notification::NotificationKind;
use crate::modules::notifications::core::order_change::{ChangeType, OrderChange, OrderRecord};
use crate::modules::orders::core::order::OrderStatus;
use crate::shell::compose::Background;
use crate::shell::state::AppState;
use crate::shell::workers::Workers;
use crate::tests::fixtures::app_state::{TestHandles, make_test_state};
use crate::tests::fixtures::orders::OrderBuilder;
use rstest::rstest;

async fn drain(state: &AppState, background: &mut Background) -> usize {
    let mut delivered = 0;
    while let Some(notification) = background.notification_bus.try_next() {
        state.notifications.add_notification(notification).await;
        delivered += 1;
    }
    delivered
}

#[rstest]
#[tokio::test]
async fn the_same_insert_seen_by_push_and_poll_is_shown_once() {
    let (state, mut handles) = make_test_state();
    let TestHandles {
        orders, alerts, background, ..
    } = &mut handles;

    background.poll.poll_once().await;

    let order = OrderBuilder::new("o-1")
        .at("2026-01-01T10:00:00.000Z")
        .build();
    orders.place(order.clone()).await;
    background
        .push
        .handle_change(OrderChange {
            event_type: ChangeType::Insert,
            old: None,
            new: Some(OrderRecord::from(&order)),
        })
        .await;
    let polled = background.poll.poll_once().await;
    assert_eq!(polled.len(), 1);
    assert_eq!(polled[0].kind, NotificationKind::NewOrder);

    assert_eq!(drain(&state, background).await, 2);
    let shown = state.notifications.notifications().await;
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].dedup_key(), ("o-1", "2026-01-01T10:00:00.000Z"));
    assert_eq!(state.notifications.unread_count().await, 1);
    assert_eq!(alerts.count().await, 1);
}

#[rstest]
#[tokio::test]
async fn a_shrinking_total_is_reported_as_exactly_one_deletion() {
    let (state, mut handles) = make_test_state();
    for i in 0..10 {
        handles
            .orders
            .place(
                OrderBuilder::new(format!("o-{i}"))
                    .at(format!("2026-01-01T10:{i:02}:00.000Z"))
                    .build(),
            )
            .await;
    }
    assert!(handles.background.poll.poll_once().await.is_empty());

    assert!(handles.orders.delete("o-3").await);
    let polled = handles.background.poll.poll_once().await;
    assert_eq!(polled.len(), 1);
    assert_eq!(polled[0].kind, NotificationKind::Deleted);
    assert_eq!(polled[0].message, "An order was removed");

    drain(&state, &mut handles.background).await;
    assert_eq!(state.notifications.notifications().await.len(), 1);
}

#[rstest]
#[tokio::test]
async fn a_status_update_after_the_insert_is_a_separate_notification() {
    let (state, mut handles) = make_test_state();
    let order = OrderBuilder::new("o-1")
        .at("2026-01-01T10:00:00.000Z")
        .build();
    handles.orders.place(order.clone()).await;
    handles.background.poll.poll_once().await;

    handles
        .orders
        .update_status("o-1", OrderStatus::Cancelled, "2026-01-01T10:05:00.000Z")
        .await;
    let polled = handles.background.poll.poll_once().await;
    assert_eq!(polled.len(), 1);
    assert_eq!(polled[0].kind, NotificationKind::Cancelled);

    drain(&state, &mut handles.background).await;
    let view = state.notifications.view().await;
    assert_eq!(view.unread_count, 1);
}

#[rstest]
#[tokio::test]
async fn running_workers_deliver_a_realtime_insert_to_the_feed() {
    let (state, handles) = make_test_state();
    let TestHandles {
        orders,
        alerts,
        background,
        ..
    } = handles;
    let workers = Workers::spawn(&state, background);

    while orders.subscriber_count().await == 0 {
        tokio::task::yield_now().await;
    }
    orders
        .place(
            OrderBuilder::new("o-42")
                .order_number("JW-42")
                .at("2026-01-01T10:00:00.000Z")
                .build(),
        )
        .await;

    tokio::time::timeout(Duration::from_secs(5), async {
        while state.notifications.notifications().await.is_empty() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("notification was not delivered");

    workers.shutdown().await;
    let shown = state.notifications.notifications().await;
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].id, "o-42");
    assert_eq!(
        shown[0].order.as_ref().map(|o| o.order_number.as_str()),
        Some("JW-42")
    );
    assert_eq!(alerts.count().await, 1);
}
