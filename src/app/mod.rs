//! Application use cases.

mod actor;
mod bootstrap;
mod director;
mod people;

pub use actor::{
    actor_create, actor_delete, actor_get, actor_list, actor_update, ActorCreateReq, ActorDto,
    ActorUpdateReq,
};
pub use bootstrap::{bootstrap, BootstrapReport};
pub use director::{
    director_create, director_delete, director_get, director_list, director_update,
    DirectorCreateReq, DirectorDto, DirectorUpdateReq,
};
