//! Channel routing table.

use crate::model::{reddit::ItemSource, settings::ChannelSettings};

/// Channel a feed item is mirrored to.
///
/// Items looked up from links are never mirrored, so `Lookup` has no channel.
pub fn channel_for(channels: &ChannelSettings, source: ItemSource) -> Option<u64> {
    match source {
        ItemSource::New => channels.new,
        ItemSource::Comments => channels.comments,
        ItemSource::Reports => channels.reports,
        ItemSource::Queue => channels.queue,
        ItemSource::Mail => channels.mail,
        ItemSource::ModActions => channels.actions,
        ItemSource::Lookup => None,
    }
}

/// Channel a moderation result is posted to.
pub fn result_channel(channels: &ChannelSettings, approved: bool) -> Option<u64> {
    if approved {
        channels.approved
    } else {
        channels.removed
    }
}
