use super::{logged, logged_lookup};
use crate::app::{
    actor_create, actor_delete, actor_get, actor_list, actor_update, ActorCreateReq, ActorDto,
    ActorUpdateReq,
};
use crate::config::DbConfig;

pub async fn cmd_actor_create(config: &DbConfig, req: ActorCreateReq) -> Option<ActorDto> {
    logged("actor_create", actor_create(config, req).await)
}

pub async fn cmd_actor_list(config: &DbConfig) -> Option<Vec<ActorDto>> {
    logged("actor_list", actor_list(config).await)
}

pub async fn cmd_actor_get(config: &DbConfig, id: i32) -> Option<ActorDto> {
    logged("actor_get", actor_get(config, id).await)
}

pub async fn cmd_actor_update(
    config: &DbConfig,
    id: i32,
    req: ActorUpdateReq,
) -> Option<ActorDto> {
    logged_lookup("actor_update", id, actor_update(config, id, req).await)
}

pub async fn cmd_actor_delete(config: &DbConfig, id: i32) -> Option<ActorDto> {
    logged_lookup("actor_delete", id, actor_delete(config, id).await)
}
