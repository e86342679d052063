/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate imgur;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use imgur::v3::{Client, Creds};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: upload_image <path> [title]")?;
    let title = std::env::args().nth(2);

    let client = Client::new(Creds::from_env()?);
    let mut image = client
        .upload_image(&path, title.as_deref(), None, None)
        .await?;

    // The upload response is partial, the link is loaded on demand
    let link = image.link().await?;
    println!("uploaded {} to {:?}", image.id(), link);
    if let Some(deletehash) = image.deletehash() {
        println!("deletehash: {}", deletehash);
    }
    Ok(())
}
