// contacts-core-client
//
// Copyright: 2026, The contacts-core-client contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::iter::once;
use std::sync::Arc;

use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};
use secrecy::SecretString;
use serde_json::{json, Value};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::{info, warn};

use common::{enable_logging, load_demo_account, load_env};
use contacts_core_client::dtos::{Contact, LiveSync, RegistrationRequest, UserId};
use contacts_core_client::infra::account::InMemoryAuthService;
use contacts_core_client::infra::document_store::{
    DocumentPath, DocumentStore, InMemoryDocumentStore,
};
use contacts_core_client::infra::general::UUIDProvider;
use contacts_core_client::{Client, ClientDelegate, ClientEvent};

struct Delegate {}

impl ClientDelegate for Delegate {
    fn handle_event(&self, client: Client, event: ClientEvent) {
        match event {
            ClientEvent::ContactListChanged => {
                let count = client.contacts.contacts().len();
                println!("\n↻ Contact list changed ({} contacts).", count)
            }
            ClientEvent::ContactsSyncFailed { error } => {
                println!("\n⚠ Live updates stopped. {}", error)
            }
            ClientEvent::SessionChanged => match client.current_user_id() {
                Some(user_id) => println!("\nSigned in as {}.", user_id),
                None => println!("\nSigned out."),
            },
        }
    }
}

struct App {
    client: Client,
    store: InMemoryDocumentStore,
    live_sync: Option<LiveSync>,
}

#[derive(Debug, Clone, Display, EnumIter)]
enum SignedOutSelection {
    #[strum(serialize = "Sign in")]
    SignIn,
    #[strum(serialize = "Register")]
    Register,
    #[strum(serialize = "Quit")]
    Quit,
}

#[derive(Debug, Clone, Display, EnumIter)]
enum Selection {
    #[strum(serialize = "List contacts")]
    ListContacts,
    #[strum(serialize = "Search contacts")]
    SearchContacts,
    #[strum(serialize = "Add contact")]
    AddContact,
    #[strum(serialize = "Edit contact")]
    EditContact,
    #[strum(serialize = "Delete contact")]
    DeleteContact,
    #[strum(serialize = "Reload contacts")]
    ReloadContacts,
    #[strum(serialize = "Start/stop live updates")]
    ToggleLiveSync,
    #[strum(serialize = "Simulate change on another device")]
    SimulateRemoteChange,
    #[strum(serialize = "Sign out")]
    SignOut,
    #[strum(serialize = "Quit")]
    Quit,
}

fn select<T: Clone + Display>(prompt: &str, options: &[T]) -> Result<Option<T>> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(0)
        .items(options)
        .interact_opt()?;
    println!();
    Ok(selection.map(|idx| options[idx].clone()))
}

fn prompt_string(prompt: &str, initial: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?)
}

fn prompt_password() -> Result<SecretString> {
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;
    Ok(SecretString::new(password))
}

fn prompt_contact(contact: Contact) -> Result<Contact> {
    let photo_uri = prompt_string(
        "Photo (path or URI)",
        contact.photo_uri.as_deref().unwrap_or_default(),
    )?;

    Ok(Contact {
        name: prompt_string("Name", &contact.name)?,
        phone: prompt_string("Phone", &contact.phone)?,
        email: prompt_string("Email", &contact.email)?,
        photo_uri: Some(photo_uri).filter(|uri| !uri.trim().is_empty()),
        ..contact
    })
}

#[derive(Clone)]
struct ContactEnvelope(Contact);

impl Display for ContactEnvelope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<30} | {:<16} | {:<30} | {}",
            self.0.name.truncate_to(30),
            self.0.phone.truncate_to(16),
            self.0.email.truncate_to(30),
            if self.0.photo_uri.is_some() { "📷" } else { "" }
        )
    }
}

fn print_contacts(contacts: Vec<Contact>) {
    if contacts.is_empty() {
        println!("No contacts.");
        return;
    }
    for contact in contacts {
        println!("{}", ContactEnvelope(contact));
    }
}

fn select_contact(client: &Client) -> Result<Option<Contact>> {
    let contacts: Vec<_> = client
        .contacts
        .contacts()
        .into_iter()
        .map(ContactEnvelope)
        .collect();

    if contacts.is_empty() {
        println!("No contacts.");
        return Ok(None);
    }

    Ok(select("Select a contact", &contacts)?.map(|envelope| envelope.0))
}

impl App {
    fn signed_in_user(&self) -> Option<UserId> {
        self.client.current_user_id()
    }

    async fn handle_signed_out(&mut self) -> Result<bool> {
        let options: Vec<_> = SignedOutSelection::iter().collect();
        let Some(selection) = select("Welcome", &options)? else {
            return Ok(true);
        };

        let result = match selection {
            SignedOutSelection::SignIn => {
                let email = prompt_string("Email", "")?;
                let password = prompt_password()?;
                self.client.account.sign_in(&email, password).await
            }
            SignedOutSelection::Register => {
                let request = RegistrationRequest {
                    name: prompt_string("Name", "")?,
                    email: prompt_string("Email", "")?,
                    phone: prompt_string("Phone", "")?,
                    password: prompt_password()?,
                };
                self.client.account.register(request).await
            }
            SignedOutSelection::Quit => return Ok(false),
        };

        if let Err(err) = result {
            println!("{}", err);
            return Ok(true);
        }

        if let Err(err) = self.client.load_contacts().await {
            println!("Could not load contacts. {}", err);
        }

        Ok(true)
    }

    async fn handle_signed_in(&mut self, user_id: UserId) -> Result<bool> {
        let options: Vec<_> = Selection::iter().collect();
        let Some(selection) = select("What do you want to do?", &options)? else {
            return Ok(true);
        };

        let contacts = &self.client.contacts;

        match selection {
            Selection::ListContacts => print_contacts(contacts.contacts()),
            Selection::SearchContacts => {
                let query = prompt_string("Search", "")?;
                print_contacts(contacts.search(&query))
            }
            Selection::AddContact => {
                let contact = prompt_contact(Contact::default())?;
                match contacts.add_contact(contact).await {
                    Ok(contact) => info!("Added contact {}.", contact.id),
                    Err(err) => println!("Could not add contact. {}", err),
                }
            }
            Selection::EditContact => {
                let Some(contact) = select_contact(&self.client)? else {
                    return Ok(true);
                };
                let contact = prompt_contact(contact)?;
                if let Err(err) = contacts.update_contact(contact).await {
                    println!("Could not update contact. {}", err)
                }
            }
            Selection::DeleteContact => {
                let Some(contact) = select_contact(&self.client)? else {
                    return Ok(true);
                };
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("Delete {}?", contact.name))
                    .default(false)
                    .interact()?;
                if confirmed {
                    if let Err(err) = contacts.delete_contact(&contact).await {
                        println!("Could not delete contact. {}", err)
                    }
                }
            }
            Selection::ReloadContacts => {
                if let Err(err) = contacts.reload_contacts().await {
                    println!("Could not load contacts. {}", err)
                }
            }
            Selection::ToggleLiveSync => match self.live_sync.take() {
                Some(live_sync) if !live_sync.is_finished() => {
                    live_sync.stop().await;
                    println!("Stopped live updates.");
                }
                _ => {
                    self.live_sync = Some(self.client.start_live_sync()?);
                    println!("Started live updates.");
                }
            },
            Selection::SimulateRemoteChange => self.simulate_remote_change(&user_id).await?,
            Selection::SignOut => {
                if let Some(live_sync) = self.live_sync.take() {
                    live_sync.stop().await;
                }
                self.client.account.sign_out().await?;
            }
            Selection::Quit => return Ok(false),
        }

        Ok(true)
    }

    /// Writes a contact straight into the store, bypassing the client.
    async fn simulate_remote_change(&self, user_id: &UserId) -> Result<()> {
        let name = prompt_string("Name of the new contact", "")?;
        let Value::Object(document) = json!({ "name": name, "phone": "", "email": "" }) else {
            bail!("Expected a JSON object.");
        };

        let path = DocumentPath::collection("users")
            .doc(user_id.as_str())
            .subcollection("contacts");
        let id = self.store.add(&path, document).await?;
        info!("Added document {} to {}.", id, path);

        if self.live_sync.is_none() {
            println!("Start live updates or reload to see the change.");
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_file = load_env()?;
    enable_logging()?;

    if let Some(path) = env_file {
        info!("Loaded settings from {:?}.", path);
    }

    let store = InMemoryDocumentStore::new(Arc::new(UUIDProvider::new()));
    let auth = Arc::new(InMemoryAuthService::new(Arc::new(UUIDProvider::new())));

    if let Some((email, password)) = load_demo_account() {
        match auth.insert_account(&email, password) {
            Ok(user_id) => info!("Created demo account {} ({}).", email, user_id),
            Err(err) => warn!("Could not create demo account. {}", err),
        }
    }

    let client = Client::builder()
        .set_document_store(Arc::new(store.clone()))
        .set_authentication_service(auth)
        .set_delegate(Some(Box::new(Delegate {})))
        .build();

    let mut app = App {
        client,
        store,
        live_sync: None,
    };

    loop {
        println!();

        let keep_running = match app.signed_in_user() {
            Some(user_id) => app.handle_signed_in(user_id).await?,
            None => app.handle_signed_out().await?,
        };

        if !keep_running {
            break;
        }
    }

    Ok(())
}

trait StringExt {
    fn truncate_to(&self, new_len: usize) -> String;
}

impl StringExt for String {
    fn truncate_to(&self, new_len: usize) -> String {
        let count = self.chars().count();

        if count <= new_len {
            return self.clone();
        }

        self.chars().take(new_len - 1).chain(once('…')).collect()
    }
}
