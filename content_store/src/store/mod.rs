//! The content repository - typed accessors over site copy, news, and users.
//!
//! Every record is read from and written back to the medium on each call; nothing is
//! cached. A malformed or missing record is never an error on the read path: it falls
//! back to the compiled-in defaults. Mutators read strictly instead and refuse to write
//! over a record they could not decode.

mod keys;

pub use keys::*;

use chrono::Utc;
use content_model::{
    default_game_data, default_news, next_news_id, Character, CharacterClass, GameData,
    GameDataPatch, NewsDraft, NewsItem, RegistrationForm, ServerStatus, User, UserPatch,
};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult, UserKey};
use crate::session::AdminCredentials;
use crate::storage::{FileStorage, MemoryStorage, Storage};

/// Content store over a storage medium.
pub struct ContentStore<S> {
    pub(crate) storage: S,
    pub(crate) keys: StorageKeys,
    pub(crate) admin: AdminCredentials,
}

impl<S: Storage> ContentStore<S> {
    /// Wrap `storage` with default keys and credentials, without seeding it.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            keys: StorageKeys::default(),
            admin: AdminCredentials::default(),
        }
    }

    /// Wrap `storage` using the keys and credentials from `config`, without seeding it.
    pub fn with_config(storage: S, config: &StoreConfig) -> Self {
        Self {
            storage,
            keys: StorageKeys::with_prefix(config.key_prefix.as_deref()),
            admin: AdminCredentials::new(&config.admin_login, &config.admin_password),
        }
    }

    /// Wrap `storage` and seed any missing records.
    pub fn open(storage: S) -> StoreResult<Self> {
        let mut store = Self::new(storage);
        store.initialize()?;
        Ok(store)
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Write the default value under each content key that is absent. Idempotent.
    pub fn initialize(&mut self) -> StoreResult<()> {
        if !is_present(&self.storage, &self.keys.game_data) {
            write_json(&mut self.storage, &self.keys.game_data, &default_game_data())?;
            debug!("seeded {} with defaults", self.keys.game_data);
        }
        if !is_present(&self.storage, &self.keys.news) {
            write_json(&mut self.storage, &self.keys.news, &default_news())?;
            debug!("seeded {} with defaults", self.keys.news);
        }
        if !is_present(&self.storage, &self.keys.users) {
            write_json(&mut self.storage, &self.keys.users, &Vec::<User>::new())?;
            debug!("seeded {} with an empty user list", self.keys.users);
        }
        Ok(())
    }

    /// Replace site copy and news with the defaults. Users and sessions are kept.
    pub fn reset_to_defaults(&mut self) -> StoreResult<()> {
        self.storage.remove(&self.keys.game_data)?;
        self.storage.remove(&self.keys.news)?;
        self.initialize()?;
        info!("content reset to defaults");
        Ok(())
    }

    // ---- Site copy ----

    /// The current site copy. Fields missing from the stored record come from the defaults.
    pub fn game_data(&self) -> GameData {
        read_json(&self.storage, &self.keys.game_data).unwrap_or_else(default_game_data)
    }

    /// Replace the stored site copy wholesale.
    pub fn update_game_data(&mut self, data: &GameData) -> StoreResult<()> {
        write_json(&mut self.storage, &self.keys.game_data, data)?;
        info!("site content updated");
        Ok(())
    }

    /// Merge the set fields of `patch` over the current site copy and store the result.
    pub fn apply_game_data_patch(&mut self, patch: GameDataPatch) -> StoreResult<GameData> {
        let mut data = read_for_update(&self.storage, &self.keys.game_data)?
            .unwrap_or_else(default_game_data);
        patch.apply_to(&mut data);
        self.update_game_data(&data)?;
        Ok(data)
    }

    pub fn set_server_status(&mut self, status: ServerStatus) -> StoreResult<()> {
        self.apply_game_data_patch(GameDataPatch::new().with_server_status(status))?;
        info!("server status set to {status}");
        Ok(())
    }

    // ---- News ----

    /// The news feed, newest first.
    pub fn news(&self) -> Vec<NewsItem> {
        read_json(&self.storage, &self.keys.news).unwrap_or_else(default_news)
    }

    /// Publish `draft` at the top of the feed with the next free id.
    ///
    /// The id is one past the largest stored id. Two writers sharing the medium can
    /// compute the same id from the same stale read.
    pub fn add_news(&mut self, draft: NewsDraft) -> StoreResult<NewsItem> {
        let mut news = self.news_for_update()?;
        let id = next_news_id(&news).ok_or(StoreError::NewsIdsExhausted)?;
        let item = draft.into_item(id);
        news.insert(0, item.clone());
        write_json(&mut self.storage, &self.keys.news, &news)?;
        info!("news #{} added: {}", item.id, item.title);
        Ok(item)
    }

    /// Remove the post with `id`. Returns false if there was none.
    pub fn delete_news(&mut self, id: u64) -> StoreResult<bool> {
        let mut news = self.news_for_update()?;
        let before = news.len();
        news.retain(|n| n.id != id);
        write_json(&mut self.storage, &self.keys.news, &news)?;

        let removed = news.len() != before;
        if removed {
            info!("news #{id} deleted");
        } else {
            debug!("news #{id} not found, nothing deleted");
        }
        Ok(removed)
    }

    fn news_for_update(&self) -> StoreResult<Vec<NewsItem>> {
        Ok(read_for_update(&self.storage, &self.keys.news)?.unwrap_or_else(default_news))
    }

    // ---- Users ----

    pub fn users(&self) -> Vec<User> {
        read_json(&self.storage, &self.keys.users).unwrap_or_default()
    }

    fn users_for_update(&self) -> StoreResult<Vec<User>> {
        Ok(read_for_update(&self.storage, &self.keys.users)?.unwrap_or_default())
    }

    /// Find a user by email or nickname.
    pub fn find_user(&self, identifier: &str) -> Option<User> {
        self.users()
            .into_iter()
            .find(|u| u.matches_identifier(identifier))
    }

    /// Register `user`. Fails with [`StoreError::DuplicateUser`] if the email or nickname
    /// is taken, leaving the stored list untouched. The record is stored without characters.
    pub fn add_user(&mut self, user: User) -> StoreResult<()> {
        let mut users = self.users_for_update()?;
        if let Some(existing) = users
            .iter()
            .find(|u| u.email == user.email || u.nickname == user.nickname)
        {
            let (field, value) = if existing.email == user.email {
                (UserKey::Email, user.email)
            } else {
                (UserKey::Nickname, user.nickname)
            };
            return Err(StoreError::DuplicateUser { field, value });
        }

        info!("user registered: {}", user.nickname);
        users.push(User {
            characters: Vec::new(),
            ..user
        });
        write_json(&mut self.storage, &self.keys.users, &users)?;
        Ok(())
    }

    /// Validate a registration form against today's date and register the account.
    pub fn register(&mut self, form: RegistrationForm) -> StoreResult<User> {
        let now = Utc::now();
        form.validate(now.date_naive())?;
        let user = form.into_user(now);
        self.add_user(user.clone())?;
        Ok(user)
    }

    /// Merge `patch` into the user with `email` and store it.
    ///
    /// If the signed-in session belongs to that user, its snapshot is refreshed too.
    /// A missing email is [`StoreError::UserNotFound`], and a new email or nickname that
    /// another user already has is [`StoreError::DuplicateUser`]. Neither writes anything.
    pub fn update_user(&mut self, email: &str, patch: UserPatch) -> StoreResult<User> {
        let mut users = self.users_for_update()?;
        let Some(index) = users.iter().position(|u| u.email == email) else {
            return Err(StoreError::UserNotFound(email.to_string()));
        };

        let mut updated = users[index].clone();
        patch.apply_to(&mut updated);

        let others = users
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, u)| u);
        for other in others {
            if other.email == updated.email {
                return Err(StoreError::DuplicateUser {
                    field: UserKey::Email,
                    value: updated.email,
                });
            }
            if other.nickname == updated.nickname {
                return Err(StoreError::DuplicateUser {
                    field: UserKey::Nickname,
                    value: updated.nickname,
                });
            }
        }

        users[index] = updated.clone();
        write_json(&mut self.storage, &self.keys.users, &users)?;
        debug!("user {email} updated");

        if self.current_user().is_some_and(|s| s.email == email) {
            self.refresh_session(&updated)?;
        }
        Ok(updated)
    }

    /// Create a level 1 character for the user with `email`.
    pub fn create_character(
        &mut self,
        email: &str,
        name: &str,
        class: CharacterClass,
    ) -> StoreResult<Character> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidInput(
                "character name must not be empty".to_string(),
            ));
        }
        let user = self
            .users_for_update()?
            .into_iter()
            .find(|u| u.email == email)
            .ok_or_else(|| StoreError::UserNotFound(email.to_string()))?;

        let mut character = Character::new(name, class, Utc::now());
        // Ids are creation millis; two characters made in the same millisecond collide
        while user.characters.iter().any(|c| c.id == character.id) {
            let millis: i64 = character.id.parse().unwrap_or_default();
            character.id = (millis + 1).to_string();
        }

        let mut characters = user.characters;
        characters.push(character.clone());
        self.update_user(email, UserPatch::new().with_characters(characters))?;
        info!("character {} ({}) created for {email}", character.name, character.class);
        Ok(character)
    }
}

impl ContentStore<MemoryStorage> {
    /// A seeded store that keeps everything in memory.
    pub fn in_memory() -> StoreResult<Self> {
        Self::open(MemoryStorage::new())
    }
}

impl ContentStore<Box<dyn Storage>> {
    /// Open and seed the store described by `config`: a [`FileStorage`] profile when
    /// `data_file` is set, memory otherwise.
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        let storage: Box<dyn Storage> = match &config.data_file {
            Some(path) => Box::new(FileStorage::open(path)?),
            None => Box::new(MemoryStorage::new()),
        };
        let mut store = Self::with_config(storage, config);
        store.initialize()?;
        Ok(store)
    }
}

/// Decode the JSON value under `key`. Absent, unreadable and malformed values are `None`.
pub(crate) fn read_json<S, T>(storage: &S, key: &str) -> Option<T>
where
    S: Storage + ?Sized,
    T: DeserializeOwned,
{
    let raw = match storage.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!("failed to read {key}, using defaults: {e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("malformed record under {key}, using defaults: {e}");
            None
        }
    }
}

/// Decode the JSON value under `key` for a read-modify-write.
///
/// Absent is `Ok(None)`. Unlike [`read_json`], an unreadable medium or a malformed value
/// is an error, so the caller never replaces data it could not see.
pub(crate) fn read_for_update<S, T>(storage: &S, key: &str) -> StoreResult<Option<T>>
where
    S: Storage + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })
}

pub(crate) fn write_json<S, T>(storage: &mut S, key: &str, value: &T) -> StoreResult<()>
where
    S: Storage + ?Sized,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    storage.set(key, raw)?;
    Ok(())
}

fn is_present<S: Storage + ?Sized>(storage: &S, key: &str) -> bool {
    storage.contains(key).unwrap_or_else(|e| {
        warn!("failed to check {key}: {e}");
        false
    })
}
