use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn alice() -> User {
    User {
        id: "user_1".to_owned(),
        username: Some("alice".to_owned()),
        email: None,
        created_at: None,
        last_sign_in_at: None,
    }
}

fn recorder() -> (Rc<RefCell<Vec<SessionSnapshot>>>, impl Fn(&SessionSnapshot) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |s: &SessionSnapshot| sink.borrow_mut().push(s.clone()))
}

#[test]
fn subscribe_delivers_current_snapshot_immediately() {
    let feed = SessionFeed::new();
    let (seen, listener) = recorder();
    let _sub = feed.subscribe(listener);
    assert_eq!(*seen.borrow(), vec![SessionSnapshot::signed_out()]);
}

#[test]
fn publish_notifies_every_subscriber() {
    let feed = SessionFeed::new();
    let (first, l1) = recorder();
    let (second, l2) = recorder();
    let _a = feed.subscribe(l1);
    let _b = feed.subscribe(l2);

    let snapshot = SessionSnapshot::signed_in(Some(SessionId::from("sess_1")), alice());
    feed.publish(snapshot.clone());

    assert_eq!(first.borrow().last(), Some(&snapshot));
    assert_eq!(second.borrow().last(), Some(&snapshot));
    assert_eq!(feed.snapshot(), snapshot);
}

#[test]
fn publish_same_snapshot_is_noop() {
    let feed = SessionFeed::new();
    let (seen, listener) = recorder();
    let _sub = feed.subscribe(listener);
    feed.publish(SessionSnapshot::signed_out());
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn dropping_subscription_stops_delivery() {
    let feed = SessionFeed::new();
    let (seen, listener) = recorder();
    let sub = feed.subscribe(listener);
    assert_eq!(feed.subscriber_count(), 1);
    drop(sub);
    assert_eq!(feed.subscriber_count(), 0);

    feed.publish(SessionSnapshot::signed_in(None, alice()));
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn subscription_outliving_feed_drops_cleanly() {
    let feed = SessionFeed::new();
    let sub = feed.subscribe(|_| {});
    drop(feed);
    drop(sub);
}

#[test]
fn listener_may_publish_reentrantly() {
    let feed = SessionFeed::new();
    let inner_feed = feed.clone();
    let _sub = feed.subscribe(move |s| {
        if s.is_authenticated() {
            inner_feed.publish(SessionSnapshot::signed_out());
        }
    });
    feed.publish(SessionSnapshot::signed_in(None, alice()));
    assert!(!feed.snapshot().is_authenticated());
}

#[test]
fn clones_share_state() {
    let feed = SessionFeed::new();
    let other = feed.clone();
    other.publish(SessionSnapshot::signed_in(None, alice()));
    assert!(feed.snapshot().is_authenticated());
}
