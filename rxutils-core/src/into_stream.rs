// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridge from push-based observables to pull-based `futures` streams.

use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::stream_item::StreamItem;
use crate::subscription::Subscription;
use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Stream of the notifications of one subscription.
///
/// Values arrive as [`StreamItem::Value`], an error as a final [`StreamItem::Error`], and
/// completion ends the stream. Dropping the stream disposes the subscription.
pub struct ObservableStream<T> {
    receiver: UnboundedReceiver<StreamItem<T>>,
    subscription: Subscription,
}

impl<T> ObservableStream<T> {
    /// The subscription feeding this stream.
    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }
}

impl<T> Stream for ObservableStream<T> {
    type Item = StreamItem<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.receiver).poll_next(cx)
    }
}

impl<T> Drop for ObservableStream<T> {
    fn drop(&mut self) {
        self.subscription.dispose();
    }
}

struct ChannelObserver<T> {
    sender: UnboundedSender<StreamItem<T>>,
}

impl<T: Send> Observer<T> for ChannelObserver<T> {
    fn on_next(&self, value: T) {
        // A dropped receiver means the stream is gone and the subscription is being disposed
        let _ = self.sender.unbounded_send(StreamItem::Value(value));
    }

    fn on_error(&self, error: RxError) {
        let _ = self.sender.unbounded_send(StreamItem::Error(error));
        self.sender.close_channel();
    }

    fn on_completed(&self) {
        self.sender.close_channel();
    }
}

impl<T: Send + 'static> Observable<T> {
    /// Subscribes and exposes the notifications as a [`Stream`] of [`StreamItem`].
    ///
    /// The channel is unbounded: a fast producer is never slowed down by a slow consumer.
    pub fn into_stream(&self) -> ObservableStream<T> {
        let (sender, receiver) = mpsc::unbounded();
        let subscription = self.subscribe(ChannelObserver { sender });
        ObservableStream {
            receiver,
            subscription,
        }
    }
}
