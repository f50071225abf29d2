mod login;
pub use login::Login;

mod coach;
pub use coach::Coach;

mod parent;
pub use parent::Parent;
