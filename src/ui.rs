pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Emotion Thermometer</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4fb;
      --bg-2: #cfe0f5;
      --ink: #23303d;
      --accent: #e8564a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e7f0fa 60%, #f4f8fc 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 26px;
    }

    header h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.5rem);
      margin: 0;
    }

    .subtitle {
      margin: 6px 0 0;
      color: #5d6b79;
      font-size: 1rem;
    }

    .gauge {
      display: grid;
      grid-template-columns: 90px 1fr;
      gap: 24px;
      align-items: end;
    }

    .tube {
      height: 240px;
      width: 56px;
      margin: 0 auto;
      border-radius: 999px;
      border: 3px solid var(--accent-2);
      background: white;
      position: relative;
      overflow: hidden;
    }

    .tube .fill {
      position: absolute;
      bottom: 0;
      left: 0;
      right: 0;
      height: 0%;
      background: linear-gradient(to top, var(--accent), #f2a04e);
      transition: height 400ms ease;
    }

    .readout {
      display: grid;
      gap: 10px;
      align-content: end;
    }

    #status {
      font-size: 1.05rem;
      font-weight: 500;
      min-height: 1.3em;
    }

    #mission {
      background: rgba(47, 72, 88, 0.07);
      border-radius: 14px;
      padding: 12px 16px;
      font-size: 0.98rem;
      min-height: 1.3em;
    }

    .levels {
      display: grid;
      grid-template-columns: repeat(5, 1fr);
      gap: 10px;
    }

    .levels button {
      appearance: none;
      border: 2px solid rgba(47, 72, 88, 0.2);
      border-radius: 14px;
      padding: 14px 0;
      font-size: 1.1rem;
      font-weight: 600;
      background: white;
      color: var(--accent-2);
      cursor: pointer;
      transition: transform 120ms ease, border-color 120ms ease;
    }

    .levels button:active {
      transform: scale(0.96);
    }

    .levels button.selected {
      border-color: var(--accent);
      background: var(--accent);
      color: white;
    }

    .fields {
      display: grid;
      gap: 12px;
    }

    .fields input {
      border: 1px solid rgba(47, 72, 88, 0.25);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 1rem;
      font-family: inherit;
    }

    #submit {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
      box-shadow: 0 10px 24px rgba(47, 72, 88, 0.3);
    }

    .message {
      font-size: 0.95rem;
      color: #5d6b79;
      min-height: 1.2em;
    }

    .message[data-type="error"] {
      color: #c63b2b;
    }

    .message[data-type="ok"] {
      color: #2d7a4b;
    }

    #log {
      margin: 0;
      padding-left: 20px;
      display: grid;
      gap: 6px;
      font-size: 0.92rem;
      color: #49555f;
    }

    @media (max-width: 520px) {
      .app {
        padding: 26px 20px;
      }
      .gauge {
        grid-template-columns: 70px 1fr;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Emotion Thermometer</h1>
      <p class="subtitle">How warm is our class feeling right now? Pick a level from 1 (calm) to 5 (intense).</p>
    </header>

    <section class="gauge">
      <div class="tube" role="img" aria-label="Community temperature gauge">
        <div class="fill" id="fill"></div>
      </div>
      <div class="readout">
        <div id="status">Loading the community temperature...</div>
        <div id="mission"></div>
      </div>
    </section>

    <section class="levels" aria-label="Emotion level">
      <button type="button" data-level="1">1</button>
      <button type="button" data-level="2">2</button>
      <button type="button" data-level="3">3</button>
      <button type="button" data-level="4">4</button>
      <button type="button" data-level="5">5</button>
    </section>

    <section class="fields">
      <input id="name" type="text" placeholder="Name (optional)" autocomplete="off" />
      <input id="keywords" type="text" placeholder="Keywords, e.g. exam, lunch, soccer" autocomplete="off" />
      <button id="submit" type="button">Record my temperature</button>
      <div class="message" id="message"></div>
    </section>

    <section>
      <ul id="log"></ul>
    </section>
  </main>

  <script>
    const fillEl = document.getElementById('fill');
    const statusEl = document.getElementById('status');
    const missionEl = document.getElementById('mission');
    const messageEl = document.getElementById('message');
    const logEl = document.getElementById('log');
    const nameEl = document.getElementById('name');
    const keywordsEl = document.getElementById('keywords');
    const submitEl = document.getElementById('submit');
    const levelButtons = Array.from(document.querySelectorAll('.levels button'));

    let selectedLevel = 0;

    const setMessage = (text, type) => {
      messageEl.textContent = text;
      messageEl.dataset.type = type || '';
    };

    const clearSelection = () => {
      selectedLevel = 0;
      levelButtons.forEach((button) => button.classList.remove('selected'));
    };

    levelButtons.forEach((button) => {
      button.addEventListener('click', () => {
        levelButtons.forEach((other) => other.classList.remove('selected'));
        button.classList.add('selected');
        selectedLevel = parseInt(button.dataset.level, 10);
      });
    });

    const renderGauge = (gauge) => {
      fillEl.style.height = `${gauge.fill_percent}%`;
      statusEl.textContent = gauge.status;
      missionEl.textContent = gauge.mission;
      logEl.innerHTML = '';
      gauge.recent.forEach((entry) => {
        const item = document.createElement('li');
        const time = new Date(entry.timestamp);
        const stamp = isNaN(time.getTime()) ? entry.timestamp : time.toLocaleTimeString();
        item.textContent = `[${stamp}] ${entry.name}: level ${entry.level}. (keywords: ${entry.keywords})`;
        logEl.appendChild(item);
      });
    };

    const loadGauge = async () => {
      try {
        const res = await fetch('/api/gauge');
        if (!res.ok) {
          throw new Error('gauge request failed');
        }
        renderGauge(await res.json());
      } catch (err) {
        statusEl.textContent = 'There was a problem loading the readings.';
      }
    };

    submitEl.addEventListener('click', async () => {
      if (selectedLevel === 0) {
        setMessage('Pick an emotion temperature first!', 'error');
        return;
      }

      try {
        const res = await fetch('/api/submit', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({
            name: nameEl.value,
            level: selectedLevel,
            keywords: keywordsEl.value
          })
        });

        if (!res.ok) {
          setMessage('Could not record the reading: server error.', 'error');
          return;
        }

        const body = await res.json();
        setMessage(`Recorded ${body.recorded}'s reading!`, 'ok');
        keywordsEl.value = '';
        clearSelection();
        loadGauge();
      } catch (err) {
        setMessage('Could not send the reading: check the network.', 'error');
      }
    });

    document.addEventListener('DOMContentLoaded', loadGauge);
  </script>
</body>
</html>
"#;
