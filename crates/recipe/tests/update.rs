use recetario_recipe::{Command, Query, RecipeInput, TextList};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_update() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = Command(pool.clone());
    let query = Query(pool);

    let created = cmd
        .create(RecipeInput {
            nombre: "Papa a la huancaína".to_owned(),
            ingredientes: Some(vec!["Papa", "Ají amarillo"].into()),
            descripcion: Some("Clásico".to_owned()),
            ..Default::default()
        })
        .await?;

    let updated = cmd
        .update(
            &created.id,
            RecipeInput {
                id: Some("ignored".to_owned()),
                nombre: "Papa a la huancaína ".to_owned(),
                ingredientes: Some("Papa, Ají amarillo, Queso fresco".into()),
                dificultad: "Intermedio".to_owned(),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.id, created.id);

    let recipe = query.find(&created.id).await?.unwrap();
    assert_eq!(recipe.nombre, "Papa a la huancaína");
    assert_eq!(recipe.dificultad, "Intermedio");
    assert_eq!(
        recipe.ingredientes,
        Some(TextList::Joined("Papa, Ají amarillo, Queso fresco".to_owned()))
    );
    assert_eq!(recipe.descripcion, None);
    assert!(query.find("ignored").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_update_not_found() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let cmd = Command(pool);

    let err = cmd
        .update(
            "missing",
            RecipeInput {
                nombre: "Rocoto relleno".to_owned(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "recipe missing not found");

    Ok(())
}
