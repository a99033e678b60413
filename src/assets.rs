//! Asynchronous texture loading.
//!
//! All work runs on one cooperative loop: a load request returns a
//! ticket immediately and its completion is delivered on a later
//! [`AssetLoader::poll`], never inside the request. The engine pumps
//! the loader at the start of every tick, so texture attachment
//! interleaves with frames the same way image-decode callbacks do on
//! an event loop.

use std::path::PathBuf;

use rustc_hash::FxHashMap;

use crate::error::Error;
use crate::material::Texture;

/// Identifier of one in-flight load request.
pub type TicketId = u64;

/// A completed load, successful or not.
#[derive(Debug)]
pub struct AssetEvent {
    /// The request this completes.
    pub ticket: TicketId,
    /// Decoded texture or the load failure.
    pub result: Result<Texture, Error>,
}

/// Capability surface for image-to-texture loading.
pub trait AssetLoader {
    /// Begin loading the named asset. Returns immediately.
    fn request(&mut self, path: &str) -> TicketId;

    /// Drain completions that have resolved since the last poll.
    fn poll(&mut self) -> Vec<AssetEvent>;
}

/// Filesystem-backed loader decoding images with the `image` crate.
///
/// Decoding happens inside `poll`, keeping request sites non-blocking.
pub struct FsAssetLoader {
    root: PathBuf,
    next_ticket: TicketId,
    queue: Vec<(TicketId, String)>,
}

impl FsAssetLoader {
    /// Loader resolving asset names under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            next_ticket: 0,
            queue: Vec::new(),
        }
    }

    fn decode(&self, name: &str) -> Result<Texture, Error> {
        let path = self.root.join(name);
        let decoded = image::open(&path).map_err(|e| {
            Error::AssetLoad(format!("{}: {e}", path.display()))
        })?;
        let rgba = decoded.to_rgba8();
        Ok(Texture {
            source: name.to_owned(),
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.into_raw(),
            repeat: None,
        })
    }
}

impl AssetLoader for FsAssetLoader {
    fn request(&mut self, path: &str) -> TicketId {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.queue.push((ticket, path.to_owned()));
        ticket
    }

    fn poll(&mut self) -> Vec<AssetEvent> {
        let queue = std::mem::take(&mut self.queue);
        queue
            .into_iter()
            .map(|(ticket, name)| AssetEvent {
                result: self.decode(&name),
                ticket,
            })
            .collect()
    }
}

/// In-memory loader serving preconfigured results; unconfigured names
/// fail. Backs headless runs and tests.
#[derive(Default)]
pub struct MemoryLoader {
    textures: FxHashMap<String, Texture>,
    next_ticket: TicketId,
    queue: Vec<(TicketId, String)>,
}

impl MemoryLoader {
    /// Empty loader; every request will fail on poll.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture served for `name`.
    pub fn insert(&mut self, name: &str, texture: Texture) {
        let _previous = self.textures.insert(name.to_owned(), texture);
    }

    /// A tiny opaque texture for `name`, convenient in tests.
    #[must_use]
    pub fn stub_texture(name: &str) -> Texture {
        Texture {
            source: name.to_owned(),
            width: 2,
            height: 2,
            pixels: vec![255; 16],
            repeat: None,
        }
    }

    /// Number of requests not yet delivered.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.queue.len()
    }
}

impl AssetLoader for MemoryLoader {
    fn request(&mut self, path: &str) -> TicketId {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.queue.push((ticket, path.to_owned()));
        ticket
    }

    fn poll(&mut self) -> Vec<AssetEvent> {
        let queue = std::mem::take(&mut self.queue);
        queue
            .into_iter()
            .map(|(ticket, name)| AssetEvent {
                result: self.textures.get(&name).cloned().ok_or_else(|| {
                    Error::AssetLoad(format!("no such asset `{name}`"))
                }),
                ticket,
            })
            .collect()
    }
}
