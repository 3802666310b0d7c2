pub use profile::Profile;
pub use username::Username;

mod profile;
mod username;
