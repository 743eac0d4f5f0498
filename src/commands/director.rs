use super::{logged, logged_lookup};
use crate::app::{
    director_create, director_delete, director_get, director_list, director_update,
    DirectorCreateReq, DirectorDto, DirectorUpdateReq,
};
use crate::config::DbConfig;

pub async fn cmd_director_create(config: &DbConfig, req: DirectorCreateReq) -> Option<DirectorDto> {
    logged("director_create", director_create(config, req).await)
}

pub async fn cmd_director_list(config: &DbConfig) -> Option<Vec<DirectorDto>> {
    logged("director_list", director_list(config).await)
}

pub async fn cmd_director_get(config: &DbConfig, id: i32) -> Option<DirectorDto> {
    logged("director_get", director_get(config, id).await)
}

pub async fn cmd_director_update(
    config: &DbConfig,
    id: i32,
    req: DirectorUpdateReq,
) -> Option<DirectorDto> {
    logged_lookup("director_update", id, director_update(config, id, req).await)
}

pub async fn cmd_director_delete(config: &DbConfig, id: i32) -> Option<DirectorDto> {
    logged_lookup("director_delete", id, director_delete(config, id).await)
}
