use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::notifications::core::feed::FeedView;
use crate::modules::notifications::core::notification::{Notification, NotificationKind};
use crate::shell::state::AppState;

#[derive(SimpleObject)]
pub struct GqlNotification {
    pub id: String,
    pub timestamp: String,
    pub kind: String,
    pub read: bool,
    pub title: String,
    pub message: String,
    pub order_number: Option<String>,
}

fn kind_name(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::NewOrder => "new_order",
        NotificationKind::StatusChange => "status_change",
        NotificationKind::Cancelled => "cancelled",
        NotificationKind::Deleted => "deleted",
    }
}

impl From<Notification> for GqlNotification {
    fn from(notification: Notification) -> Self {
        Self {
            kind: kind_name(notification.kind).to_string(),
            order_number: notification.order.map(|o| o.order_number),
            id: notification.id,
            timestamp: notification.timestamp,
            read: notification.read,
            title: notification.title,
            message: notification.message,
        }
    }
}

#[derive(SimpleObject)]
pub struct GqlNotificationFeed {
    pub notifications: Vec<GqlNotification>,
    pub unread_count: u64,
    pub panel_open: bool,
}

impl From<FeedView> for GqlNotificationFeed {
    fn from(view: FeedView) -> Self {
        Self {
            notifications: view.notifications.into_iter().map(Into::into).collect(),
            unread_count: view.unread_count as u64,
            panel_open: view.panel_open,
        }
    }
}

#[derive(Default)]
pub struct NotificationQuery;

#[Object]
impl NotificationQuery {
    async fn notifications(&self, context: &Context<'_>) -> GqlResult<GqlNotificationFeed> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.notifications.view().await.into())
    }
}

#[derive(Default)]
pub struct NotificationMutation;

#[Object]
impl NotificationMutation {
    async fn mark_all_notifications_read(
        &self,
        context: &Context<'_>,
    ) -> GqlResult<GqlNotificationFeed> {
        let state = context.data_unchecked::<AppState>();
        state.notifications.mark_all_read().await;
        Ok(state.notifications.view().await.into())
    }
}
