mod commands;
mod core;
mod shared;

use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_clipboard_manager::init())
        .setup(|app| {
            // Fail fast if the bundled catalog is broken; the frontend
            // surfaces the same error with a retry affordance.
            match crate::core::catalog::load_catalog() {
                Ok(list) => println!("[Setup] Language catalog: {} entries", list.languages.len()),
                Err(e) => eprintln!("[Setup] Language catalog failed to load: {}", e),
            }

            let translator = crate::core::translator::GoogleTranslator::new()?;
            let sink = commands::EventSink::new(app.handle().clone());
            app.manage(crate::core::form::TranslateForm::new(translator, sink));

            // Warm the settings file so first get_settings is instant.
            tauri::async_runtime::spawn(async {
                match crate::shared::settings::AppSettings::load().await {
                    Ok(settings) => println!(
                        "[Setup] Settings loaded: {} -> {}",
                        settings.preferences.default_source_lang,
                        settings.preferences.default_dest_lang
                    ),
                    Err(e) => eprintln!("[Setup] Failed to load settings: {}", e),
                }
            });

            println!("✅ Translator initialized");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_languages,
            commands::submit_translation,
            commands::get_settings,
            commands::save_settings,
            commands::analyse_text,
            commands::copy_to_clipboard,
            commands::log_message,
        ])
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            eprintln!("FATAL: Failed to start Tauri application: {}", e);
            std::process::exit(1);
        });
}
