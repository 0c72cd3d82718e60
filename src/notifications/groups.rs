/**
 * Notification Group Registry
 *
 * Maintains one broadcast channel per user id ("group"). Every live
 * connection a user holds subscribes a receiver on that user's channel, so
 * a published message reaches all of their connections (multiple browser
 * tabs included).
 *
 * # Delivery Semantics
 *
 * Fire and forget: publishing to a user with no live connections drops the
 * message - there is no queuing, no retry, and no dead-letter. Nothing
 * survives a dropped connection; a reconnect joins fresh.
 *
 * # Concurrency
 *
 * The map is guarded by a plain mutex held only for map access, never
 * across an await point. Updates are keyed per user, so contention is
 * minimal and no global coordination is needed.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;
use uuid::Uuid;

/// Buffered messages per group before slow receivers start lagging.
const GROUP_CHANNEL_CAPACITY: usize = 64;

/// Concurrent registry mapping user ids to their notification channels.
#[derive(Clone)]
pub struct NotificationGroups {
    groups: Arc<Mutex<HashMap<Uuid, broadcast::Sender<String>>>>,
}

impl NotificationGroups {
    pub fn new() -> Self {
        Self {
            groups: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Join the group for `user_id`, creating it on first join. Returns the
    /// receiver for one live connection; dropping the receiver leaves the
    /// group.
    pub fn join(&self, user_id: Uuid) -> broadcast::Receiver<String> {
        let mut groups = self.groups.lock().unwrap();
        groups
            .entry(user_id)
            .or_insert_with(|| broadcast::channel(GROUP_CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Send `message` to every connection in the group for `user_id`.
    ///
    /// Returns how many connections received it; 0 when the group does not
    /// exist or has no live connections (the message is dropped).
    pub fn publish(&self, user_id: Uuid, message: String) -> usize {
        let groups = self.groups.lock().unwrap();
        match groups.get(&user_id) {
            Some(sender) => sender.send(message).unwrap_or(0),
            None => 0,
        }
    }

    /// Number of live connections currently in the group for `user_id`.
    pub fn connection_count(&self, user_id: Uuid) -> usize {
        let groups = self.groups.lock().unwrap();
        groups
            .get(&user_id)
            .map(|sender| sender.receiver_count())
            .unwrap_or(0)
    }

    /// Drop group channels with no live connections.
    pub fn cleanup_idle_groups(&self) {
        self.groups
            .lock()
            .unwrap()
            .retain(|_, sender| sender.receiver_count() > 0);
    }

    /// Number of groups currently registered.
    pub fn group_count(&self) -> usize {
        self.groups.lock().unwrap().len()
    }
}

impl Default for NotificationGroups {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_reaches_single_connection() {
        let groups = NotificationGroups::new();
        let user = Uuid::new_v4();

        let mut rx = groups.join(user);
        let delivered = groups.publish(user, "hello".to_string());

        assert_eq!(delivered, 1);
        assert_eq!(rx.recv().await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_publish_reaches_every_tab() {
        let groups = NotificationGroups::new();
        let user = Uuid::new_v4();

        let mut rx1 = groups.join(user);
        let mut rx2 = groups.join(user);
        let mut rx3 = groups.join(user);

        let delivered = groups.publish(user, "answered".to_string());
        assert_eq!(delivered, 3);

        assert_eq!(rx1.recv().await.unwrap(), "answered");
        assert_eq!(rx2.recv().await.unwrap(), "answered");
        assert_eq!(rx3.recv().await.unwrap(), "answered");
    }

    #[tokio::test]
    async fn test_publish_to_absent_group_drops_message() {
        let groups = NotificationGroups::new();
        assert_eq!(groups.publish(Uuid::new_v4(), "lost".to_string()), 0);
    }

    #[tokio::test]
    async fn test_publish_does_not_cross_groups() {
        let groups = NotificationGroups::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        let mut alice_rx = groups.join(alice);
        let mut bob_rx = groups.join(bob);

        groups.publish(alice, "for alice".to_string());

        assert_eq!(alice_rx.recv().await.unwrap(), "for alice");
        assert!(matches!(
            bob_rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }

    #[tokio::test]
    async fn test_disconnect_leaves_group() {
        let groups = NotificationGroups::new();
        let user = Uuid::new_v4();

        let rx = groups.join(user);
        assert_eq!(groups.connection_count(user), 1);

        drop(rx);
        assert_eq!(groups.connection_count(user), 0);
        assert_eq!(groups.publish(user, "nobody home".to_string()), 0);
    }

    #[tokio::test]
    async fn test_cleanup_removes_empty_groups_only() {
        let groups = NotificationGroups::new();
        let idle = Uuid::new_v4();
        let active = Uuid::new_v4();

        let idle_rx = groups.join(idle);
        let _active_rx = groups.join(active);
        drop(idle_rx);

        assert_eq!(groups.group_count(), 2);
        groups.cleanup_idle_groups();
        assert_eq!(groups.group_count(), 1);
        assert_eq!(groups.connection_count(active), 1);
    }

    #[tokio::test]
    async fn test_rejoin_after_cleanup() {
        let groups = NotificationGroups::new();
        let user = Uuid::new_v4();

        drop(groups.join(user));
        groups.cleanup_idle_groups();

        let mut rx = groups.join(user);
        assert_eq!(groups.publish(user, "back".to_string()), 1);
        assert_eq!(rx.recv().await.unwrap(), "back");
    }
}
